//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            ),
    )
    // Organization landing page with the creation form
    .service(
        web::resource("/org/{slug}")
            .route(web::get().to(pages::org_landing))
            .route(web::post().to(pages::submit_post)),
    )
    // Tenant feed
    .route("/s/{subdomain}", web::get().to(pages::tenant_feed));
}
