#[cfg(feature = "serve")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::{Files, NamedFile};
    use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
    use actix_web::{App, HttpServer};
    use leptos::logging::log;

    // Directory produced by `trunk build`.
    let site_root = std::env::var("SITE_ROOT").unwrap_or_else(|_| "dist".to_string());
    let addr = std::env::var("SITE_ADDR").unwrap_or_else(|_| "127.0.0.1:3004".to_string());
    log!("serving {} on http://{}", site_root, addr);

    HttpServer::new(move || {
        let index = format!("{site_root}/index.html");
        App::new().service(
            Files::new("/", site_root.clone())
                .index_file("index.html")
                // Client-side routes such as /tools/3 all get the app shell.
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                })),
        )
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "serve"))]
pub fn main() {
    // to run: `trunk serve --open`
    use tooldeck::app::App;

    tooldeck::utils::panic_hook::init();
    leptos::mount_to_body(App);
}
