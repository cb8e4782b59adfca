//! The about page.

use actix_web::HttpResponse;

use blognest_shared::ApiResponse;
use blognest_shared::dto::{AboutResponse, Feature};

const TAGLINE: &str = "A modern, fast, and beautiful blogging platform designed for writers who want to share their stories with the world.";

const MISSION: [&str; 2] = [
    "BlogNest was created with a simple mission: to provide writers with a beautiful, fast, and intuitive platform to share their thoughts and connect with readers worldwide. We believe that everyone has a story worth telling, and we want to make it as easy as possible to tell it.",
    "Whether you're a seasoned blogger, a technical writer sharing tutorials, or someone just starting their writing journey, BlogNest provides the tools and community you need to succeed.",
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Fast & Modern",
        "Built with Rust and actix-web for optimal performance and a small footprint.",
    ),
    (
        "Community Driven",
        "Connect with writers and readers from around the world. Share ideas and grow together.",
    ),
    (
        "Accessible",
        "Designed with accessibility in mind, ensuring everyone can enjoy great content.",
    ),
    (
        "Open Source",
        "Built in the open with modern technologies and best practices.",
    ),
];

const TECH_STACK: [&str; 5] = ["Rust", "actix-web", "tokio", "serde", "tracing"];

const GETTING_STARTED: [&str; 4] = [
    "Open the create post form",
    "Fill in your post title, content, and tags",
    "Add a featured image URL (optional)",
    "Publish the post to share it with the community",
];

/// GET /api/about
pub async fn about() -> HttpResponse {
    let page = AboutResponse {
        tagline: TAGLINE.to_string(),
        mission: MISSION.iter().map(|p| p.to_string()).collect(),
        features: FEATURES
            .iter()
            .map(|(title, description)| Feature {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        tech_stack: TECH_STACK.iter().map(|t| t.to_string()).collect(),
        getting_started: GETTING_STARTED.iter().map(|s| s.to_string()).collect(),
    };

    HttpResponse::Ok().json(ApiResponse::ok(page))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::Value;

    use crate::handlers::test_support;

    #[actix_web::test]
    async fn test_about_lists_features() {
        let state = test_support::state().await;
        let app = test::init_service(App::new().configure(test_support::mount(state))).await;

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["features"].as_array().unwrap().len(), 4);
        assert_eq!(body["data"]["techStack"][0], "Rust");
    }
}
