// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Load a Google service-account key from fallback locations and exchange it for an access token
// role: sources/credentials
// inputs: ordered credential paths; service-account JSON (client_email, private_key, token_uri)
// outputs: ServiceAccount; bearer access token string
// side_effects: Reads files; POSTs a signed JWT assertion to the token endpoint
// invariants:
// - paths are tried in order; only the last failure is fatal
// - assertion is RS256, audience = token_uri, lifetime one hour
// errors: Read/parse/sign/HTTP failures bubble with path or URL context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_TTL_SECS: i64 = 3600;

pub fn default_credential_paths() -> Vec<PathBuf> {
  vec![
    PathBuf::from("src/data/credentials.json"),
    PathBuf::from("../src/data/credentials.json"),
  ]
}

fn default_token_uri() -> String {
  "https://oauth2.googleapis.com/token".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
  pub client_email: String,
  pub private_key: String,
  #[serde(default = "default_token_uri")]
  pub token_uri: String,
}

#[derive(Serialize)]
struct Claims<'a> {
  iss: &'a str,
  scope: &'a str,
  aud: &'a str,
  iat: i64,
  exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
  access_token: String,
}

fn read_service_account(path: &Path) -> Result<ServiceAccount> {
  let text = std::fs::read_to_string(path)
    .with_context(|| format!("reading credentials {}", path.display()))?;

  serde_json::from_str(&text).with_context(|| format!("parsing credentials {}", path.display()))
}

/// Try each path in order and return the first usable service account.
pub fn load_service_account(paths: &[PathBuf]) -> Result<ServiceAccount> {
  let mut last_err = None;

  for (i, path) in paths.iter().enumerate() {
    match read_service_account(path) {
      Ok(sa) => {
        tracing::debug!(path = %path.display(), "loaded service account");
        return Ok(sa);
      }
      Err(e) => {
        if i + 1 < paths.len() {
          tracing::warn!(path = %path.display(), "credentials unusable ({:#}); trying next location", e);
        }
        last_err = Some(e);
      }
    }
  }

  Err(last_err.unwrap_or_else(|| anyhow!("no credential paths configured")))
}

/// Build the signed JWT assertion for the jwt-bearer grant.
pub fn signed_assertion(sa: &ServiceAccount, now_epoch: i64) -> Result<String> {
  let key = EncodingKey::from_rsa_pem(sa.private_key.as_bytes())
    .context("parsing service-account private key")?;
  let claims = Claims {
    iss: &sa.client_email,
    scope: SHEETS_SCOPE,
    aud: &sa.token_uri,
    iat: now_epoch,
    exp: now_epoch + ASSERTION_TTL_SECS,
  };

  jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key).context("signing token assertion")
}

pub fn exchange_token(agent: &ureq::Agent, sa: &ServiceAccount) -> Result<String> {
  let assertion = signed_assertion(sa, chrono::Utc::now().timestamp())?;

  let resp = agent
    .post(&sa.token_uri)
    .send_form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
    .with_context(|| format!("requesting access token from {}", sa.token_uri))?;

  let body: TokenResponse = resp.into_json().context("decoding token response")?;

  Ok(body.access_token)
}
