use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::{web, HttpRequest};
use std::io;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// Path prefixes owned by the API. Misses under them stay JSON 404s instead of
/// falling through to the frontend.
const API_PREFIXES: [&str; 7] = [
    "/recipes",
    "/initialize",
    "/search",
    "/sam",
    "/health",
    "/api-docs",
    "/swagger-ui",
];

/// The built single-page frontend, served from `/` after every API route
#[derive(Clone)]
pub struct StaticSite {
    root: PathBuf,
}

impl StaticSite {
    /// Fails when `root` has no `index.html`
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        if !root.join(INDEX_FILE).is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has no {}", root.display(), INDEX_FILE),
            ));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Mounts the file service; must be registered after the API routes.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let index = self.root.join(INDEX_FILE);

        cfg.service(
            Files::new("/", &self.root)
                .index_file(INDEX_FILE)
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let res = if is_client_route(&req) {
                            // Client-side routes such as /recipe/abc resolve in the browser
                            NamedFile::open_async(&index).await?.into_response(&req)
                        } else {
                            super::not_found(req.clone()).await
                        };
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                })),
        );
    }
}

fn is_client_route(req: &HttpRequest) -> bool {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return false;
    }
    let path = req.path();
    !API_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
}
