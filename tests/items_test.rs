//! Integration tests for weapon and armor lookup and edit routes.

mod common;

use common::TestHarness;

fn weapon_form(name: &str, monster_only: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("weight", "10".to_string()),
        ("min_damage", "2".to_string()),
        ("max_damage", "6".to_string()),
        ("buy_value", "25".to_string()),
        ("sell_value", "12".to_string()),
        ("monster_only", monster_only.to_string()),
        ("image_url", String::new()),
        ("description", "Rebalanced for the arena.".to_string()),
    ]
}

fn armor_form(name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("ac", "22".to_string()),
        ("weight", "16".to_string()),
        ("damage_buffer", "3".to_string()),
        ("buy_value", "120".to_string()),
        ("sell_value", "40".to_string()),
        ("monster_only", "false".to_string()),
        ("description", "Reinforced straps.".to_string()),
    ]
}

#[tokio::test]
async fn lookup_seeded_weapon() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!("http://{addr}/explorer/weapon/rapier"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("rapier"));
    assert!(body.contains("thrust weapon"));
}

#[tokio::test]
async fn lookup_weapon_with_spaces_in_name() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!("http://{addr}/explorer/weapon/Norse%20field%20axe"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("bearded axe blade"));
}

#[tokio::test]
async fn unknown_weapon_is_404() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!("http://{addr}/explorer/weapon/excalibur"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "weapon not found: excalibur");
}

#[tokio::test]
async fn weapon_edit_persists_including_monster_only() {
    let (h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/explorer/weapon/cutlass"))
        .form(&weapon_form("cutlass", "true"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let conn = h.conn();
    let cutlass = gh_db::queries::weapons::get_weapon_by_name(&conn, "cutlass")
        .unwrap()
        .unwrap();
    assert!(cutlass.monster_only);
    assert_eq!(cutlass.min_damage, 2);
    assert_eq!(cutlass.max_damage, 6);
    assert_eq!(cutlass.description, "Rebalanced for the arena.");
}

#[tokio::test]
async fn lookup_seeded_armor() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!("http://{addr}/explorer/armor/cloth%20rags"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("cloth rags"));
    assert!(body.contains("very little protection"));
}

#[tokio::test]
async fn armor_lookup_by_name_query() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!(
        "http://{addr}/explorer/armor/by_name/?name=Dragon+Scale+Armor"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Dragon Scale Armor"));
}

#[tokio::test]
async fn unknown_armor_is_404() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!("http://{addr}/explorer/armor/mithril"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn armor_edit_persists() {
    let (h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/explorer/armor/leather%20armor"))
        .form(&armor_form("leather armor"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Reinforced straps."));

    let conn = h.conn();
    let armor = gh_db::queries::armor::get_armor_by_name(&conn, "leather armor")
        .unwrap()
        .unwrap();
    assert_eq!(armor.ac, 22);
    assert_eq!(armor.damage_buffer, 3);
}

#[tokio::test]
async fn edit_form_preselects_monster_only() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("http://{addr}/explorer/weapon/cutlass"))
        .form(&weapon_form("cutlass", "true"))
        .send()
        .await
        .unwrap();

    let resp = reqwest::get(format!("http://{addr}/explorer/weapon/cutlass/edit"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    // Saving the form unchanged must not flip monster_only back to false.
    assert!(body.contains(r#"<option value="true" selected>true</option>"#));
    assert!(body.contains(r#"<option value="false" >false</option>"#));
}

#[tokio::test]
async fn armor_edit_form_defaults_monster_only_to_current_value() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!("http://{addr}/explorer/armor/cloth%20rags/edit"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"<option value="false" selected>false</option>"#));
}

#[tokio::test]
async fn weapon_edit_form_page_is_prefilled() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!("http://{addr}/explorer/weapon/small%20club/edit"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("small club"));
    assert!(body.contains("monster_only"));
}
