use app::{
    i18n::{LOCALES, localized_path},
    site::SITE_PAGES,
    types::AppState,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use core::fmt::Write as _;
use tracing::error;

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// Sitemap listing every static page in every locale.
pub fn generate_sitemap(site_url: &str) -> Result<String, core::fmt::Error> {
    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for page in SITE_PAGES {
        for locale in LOCALES {
            sitemap.push_str("<url>\n");
            writeln!(sitemap, "<loc>{site_url}{}</loc>", localized_path(locale, page.path))?;
            writeln!(sitemap, "<changefreq>{}</changefreq>", page.changefreq)?;
            writeln!(sitemap, "<priority>{}</priority>", page.priority)?;
            sitemap.push_str("</url>\n");
        }
    }
    sitemap.push_str("</urlset>");
    Ok(sitemap)
}

pub async fn sitemap_handler(State(state): State<AppState>) -> Response<String> {
    match generate_sitemap(&state.site.site_url) {
        Ok(sitemap) => build_response(sitemap, "application/xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to build sitemap");
            build_response(
                "Failed to build sitemap".to_string(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
