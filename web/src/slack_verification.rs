// SLACK_SIGNING_SECRET
use std::env;

use sha2::Sha256;
use hmac::{Hmac, Mac};
use hex;

use lambda_http::{Request, Body};
use std::time::{SystemTime, Duration};
use anyhow::{Context, Result, bail};

type HmacSha256 = Hmac<Sha256>;

// https://api.slack.com/authentication/verifying-requests-from-slack
pub fn verify_slack_request(request: &Request) -> Result<()> {
    let headers = request.headers();
    let body = match request.body() {
        Body::Text(text) => text.as_bytes(),
        Body::Binary(data) => data.as_slice(),
        Body::Empty => bail!("no body"),
    };
    let slack_signature = headers.get("X-Slack-Signature")
        .context("X-Slack-Signature is empty")?
        .to_str()?;
    let slack_timestamp = headers.get("X-Slack-Request-Timestamp")
        .context("X-Slack-Request-Timestamp is empty")?
        .to_str()?;
    let slack_timestamp_time: u64 = slack_timestamp.parse()?;
    let slack_timestamp_time = Duration::from_secs(slack_timestamp_time);
    let now = SystemTime::now();
    let now = now.duration_since(SystemTime::UNIX_EPOCH)?;
    // checked_sub also rejects timestamps from the future
    let delta = now.checked_sub(slack_timestamp_time)
        .context("the request timestamp is ahead of local time")?;
    if delta > Duration::from_secs(5 * 60) {
        bail!("The request timestamp is more than five minutes from local time");
    }
    let signing_secret = env::var("SLACK_SIGNING_SECRET")?;
    let verification_result = verify_signature(&signing_secret, slack_timestamp, body, slack_signature)?;
    if verification_result {
        Ok(())
    } else {
        bail!("verification failed")
    }
}

// https://api.slack.com/authentication/verifying-requests-from-slack#making__validating-a-request
fn verify_signature(signing_secret: &str, timestamp: &str, body: &[u8], signature_actual: &str) -> Result<bool> {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())?;
    let prefix = ["v0", timestamp].join(":");
    mac.update(prefix.as_bytes());
    mac.update(b":");
    mac.update(body);
    let mac = mac.finalize();
    let signature_expected = mac.into_bytes();
    let signature_expected = hex::encode(&signature_expected);
    let signature_expected = ["v0=", signature_expected.as_str()].join("");
    Ok(signature_actual == signature_expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
    const TIMESTAMP: &str = "1531420618";
    const BODY: &[u8] = b"token=xyzz0&command=%2Flunch&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1%2F1%2Fa";

    // assembles the signature straight from the v0:<timestamp>:<body> basestring
    fn sign(secret: &str, timestamp: &str, body: &[u8]) -> String {
        let mut basestring = format!("v0:{}:", timestamp).into_bytes();
        basestring.extend_from_slice(body);
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(&basestring);
        format!("v0={}", hex::encode(mac.finalize().into_bytes()))
    }

    #[test]
    fn accepts_matching_signature() {
        let signature = sign(SECRET, TIMESTAMP, BODY);
        assert!(verify_signature(SECRET, TIMESTAMP, BODY, &signature).unwrap());
    }

    #[test]
    fn rejects_tampered_body() {
        let signature = sign(SECRET, TIMESTAMP, BODY);
        let tampered = b"token=xyzz0&command=%2Fdinner";
        assert!(!verify_signature(SECRET, TIMESTAMP, tampered, &signature).unwrap());
    }

    #[test]
    fn rejects_foreign_secret() {
        let signature = sign("another-secret", TIMESTAMP, BODY);
        assert!(!verify_signature(SECRET, TIMESTAMP, BODY, &signature).unwrap());
    }
}
