use gatehouse::auth::AuthPolicy;
use gatehouse::config::Config;

#[test]
fn test_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.max_connections, 256);
    assert_eq!(cfg.server.max_request_bytes, 64 * 1024);
    assert_eq!(cfg.content.pages_root, "www");
    assert_eq!(cfg.content.assets_root, "static");
    assert_eq!(cfg.content.apps_root, "apps");
    assert_eq!(cfg.auth.username, "admin");
    assert_eq!(cfg.auth.password, "password");
    assert_eq!(cfg.auth.policy, AuthPolicy::Unauthorized);
    assert_eq!(cfg.auth.login_page, "/login.html");
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml("server:\n  listen_addr: 0.0.0.0:3000\n").unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server.max_connections, 256);
    assert_eq!(cfg.auth.username, "admin");
}

#[test]
fn test_full_yaml_override() {
    let yaml = r#"
server:
  listen_addr: 0.0.0.0:9000
  max_connections: 8
  max_request_bytes: 2048
content:
  pages_root: site/pages
  assets_root: site/assets
  apps_root: site/apps
auth:
  username: operator
  password: hunter2
  policy: redirect_to_login
  login_page: /signin.html
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.max_connections, 8);
    assert_eq!(cfg.server.max_request_bytes, 2048);
    assert_eq!(cfg.content.pages_root, "site/pages");
    assert_eq!(cfg.auth.username, "operator");
    assert_eq!(cfg.auth.policy, AuthPolicy::RedirectToLogin);
    assert_eq!(cfg.auth.login_page, "/signin.html");
}

#[test]
fn test_invalid_policy_is_an_error() {
    let result = Config::from_yaml("auth:\n  policy: allow_everyone\n");
    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
}
