use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn site_root_defaults_to_leptos_metadata() {
    let host = HostConfig::default();
    assert_eq!(site_root(&host, "target/site"), PathBuf::from("target/site"));
}

#[test]
fn site_root_override_wins() {
    let host = HostConfig { site_root: Some(PathBuf::from("/srv/folio")), ..HostConfig::default() };
    assert_eq!(site_root(&host, "target/site"), PathBuf::from("/srv/folio"));
}
