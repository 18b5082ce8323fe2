//! Tests for serenity model conversions.
//!
//! Serenity models are non-exhaustive, so fixtures are built from the JSON
//! Discord would send.

#![cfg(feature = "discord")]

use quill_social::{convert_attachment, convert_user};
use serde_json::json;
use serenity::model::channel::Attachment;
use serenity::model::user::User;

fn discord_user() -> User {
    serde_json::from_value(json!({
        "id": "80351110224678912",
        "username": "ferris",
        "discriminator": "0",
        "global_name": "Ferris the Crab",
        "avatar": null,
        "bot": true
    }))
    .expect("Valid user JSON")
}

#[test]
fn test_user_keeps_names_and_bot_flag() {
    let user = convert_user(&discord_user()).expect("Conversion failed");

    assert_eq!(user.id().get(), 80351110224678912);
    assert_eq!(user.name(), "ferris");
    assert_eq!(user.shown_name(), "Ferris the Crab");
    assert!(*user.bot());
    assert!(user.avatar_url().is_none());
}

#[test]
fn test_attachment_keeps_type_and_size() {
    let attachment: Attachment = serde_json::from_value(json!({
        "id": "1100000000000000000",
        "filename": "cat.png",
        "size": 2048,
        "url": "https://cdn.discordapp.com/attachments/1/2/cat.png",
        "proxy_url": "https://media.discordapp.net/attachments/1/2/cat.png",
        "height": 64,
        "width": 64,
        "content_type": "image/png"
    }))
    .expect("Valid attachment JSON");

    let converted = convert_attachment(&attachment).expect("Conversion failed");
    assert_eq!(converted.filename(), "cat.png");
    assert_eq!(*converted.size(), 2048);
    assert!(converted.is_image());
}
