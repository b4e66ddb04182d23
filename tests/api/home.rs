use crate::helpers::spawn_app;

#[tokio::test]
async fn home_page_serves_the_brochure_with_the_contact_form() {
    // Arrange
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.unwrap();
    // The form contract: three named inputs, a submit control, and the
    // script posting to the handler endpoint
    assert!(html.contains(r#"id="contact-form""#));
    assert!(html.contains(r#"name="name""#));
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"name="message""#));
    assert!(html.contains(r#"id="submit-button""#));
    assert!(html.contains("/api/contact"));
    // Success notice auto-dismisses after 5 seconds
    assert!(html.contains("5000"));
    // Brochure sections survive alongside the form
    for section in [
        "hero",
        "about",
        "ecosystem",
        "technologies",
        "why-csouth",
        "contact",
    ] {
        assert!(
            html.contains(&format!(r#"<section id="{}">"#, section)),
            "missing section {}",
            section
        );
    }
}
