use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<Response<Body>> {
        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<Response<Body>> {
        self.send(Request::builder().uri(uri).body(Body::empty())?)
            .await
    }

    /// GET carrying a flash cookie left by a previous response.
    pub async fn get_with_flash(&self, uri: &str, flash: &str) -> anyhow::Result<Response<Body>> {
        self.send(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, flash)
                .body(Body::empty())?,
        )
        .await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> anyhow::Result<Response<Body>> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(serde_urlencoded::to_string(fields)?))?,
        )
        .await
    }

    pub async fn add_item(&self, name: &str, quantity: &str, expires_on: &str) -> anyhow::Result<()> {
        let response = self
            .post_form(
                "/items",
                &[("name", name), ("quantity", quantity), ("expires_on", expires_on)],
            )
            .await?;
        anyhow::ensure!(response.status() == 303, "add item failed: {}", response.status());

        Ok(())
    }

    pub async fn add_recipe(&self, title: &str, ingredients: &str) -> anyhow::Result<()> {
        let response = self
            .post_form(
                "/recipes",
                &[
                    ("title", title),
                    ("ingredients", ingredients),
                    ("instructions", "Cook it."),
                ],
            )
            .await?;
        anyhow::ensure!(response.status() == 303, "add recipe failed: {}", response.status());

        Ok(())
    }
}

pub async fn create_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("pantryplan.db").display());
    let pool = pantryplan::db::create_pool(&url, 1).await?;
    pantryplan::migrate::run(&pool).await?;

    let router = pantryplan::create_app(pool.clone(), pool.clone());

    Ok(TestApp {
        router,
        pool,
        _dir: dir,
    })
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

/// `name=value` part of the flash Set-Cookie header.
pub fn flash_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("flash="))
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}
