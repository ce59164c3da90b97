use super::fixed_signer;
use anyhow::Result;
use http::{header, Request};
use pretty_assertions::assert_eq;
use s3sig_core::ErrorKind;
use sha2::{Digest, Sha256};
use test_case::test_case;

const EMPTY_BODY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test_case(
    "2015-08-30T12:36:00Z",
    "https://s3.amazonaws.com/myBucket/myImage.png",
    "20150830T123600Z",
    "159811d34bf02af4a7a0acbb48439d397535918c51e3e808649fada10564bb06";
    "plain path"
)]
#[test_case(
    "2015-08-30T12:36:01Z",
    "https://s3.amazonaws.com/myBucket/myImage.png",
    "20150830T123601Z",
    "5ab9fb3de7df138ae52e059e0cb4ed0f07622069206847db22555016f9392c48";
    "one second later"
)]
#[test_case(
    "2015-08-30T12:36:00Z",
    "https://s3.amazonaws.com/my%20bucket/my%20image.png",
    "20150830T123600Z",
    "5739dbdcc9043c44c9e4caa1633b34ecb0f99dd8342d6276c697e5eccee7f9ed";
    "path with spaces"
)]
fn test_golden_us_east_1(time: &str, uri: &str, date: &str, signature: &str) -> Result<()> {
    let signer = fixed_signer("us-east-1", time)?;

    let req = signer.sign_http(Request::get(uri).body(Vec::<u8>::new())?)?;

    assert_eq!(req.method(), http::Method::GET);
    assert_eq!(req.uri().to_string(), uri);
    assert_eq!(req.headers()["x-amz-date"], date);
    assert_eq!(req.headers()["x-amz-content-sha256"], EMPTY_BODY_SHA256);
    assert_eq!(req.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(req.headers()[header::HOST], "s3.amazonaws.com");
    assert_eq!(
        req.headers()[header::AUTHORIZATION],
        format!(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/s3/aws4_request, \
             SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date, \
             Signature={signature}"
        )
        .as_str()
    );
    Ok(())
}

#[test]
fn test_golden_with_body_and_extra_header() -> Result<()> {
    let signer = fixed_signer("eu-west-1", "2015-08-30T12:36:00Z")?;
    let body = "Hello,World!";

    let req = Request::get("https://s3.amazonaws.com/myBucket/myImage.png")
        .header("x-amz-meta-note", "hello   world")
        .body(body)?;
    let req = signer.sign_http(req)?;

    assert_eq!(
        req.headers()["x-amz-content-sha256"],
        hex::encode(Sha256::digest(body.as_bytes())).as_str()
    );
    assert_eq!(
        req.headers()[header::AUTHORIZATION],
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/eu-west-1/s3/aws4_request, \
         SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date;x-amz-meta-note, \
         Signature=021470b3a50b88fc40294d60036dad822a1fb1931efffe1de15d0ff4f34de987"
    );
    assert_eq!(*req.body(), body);
    Ok(())
}

#[test]
fn test_same_input_same_signature() -> Result<()> {
    let signer = fixed_signer("us-east-1", "2015-08-30T12:36:00Z")?;
    let uri = "https://s3.amazonaws.com/myBucket/myImage.png";

    let first = signer.sign_http(Request::get(uri).body(Vec::<u8>::new())?)?;
    let second = signer.sign_http(Request::get(uri).body(Vec::<u8>::new())?)?;
    assert_eq!(first.headers(), second.headers());

    // Signing an already signed request doesn't change it.
    let third = signer.sign_http(first)?;
    assert_eq!(third.headers(), second.headers());
    Ok(())
}

#[test]
fn test_path_less_request_is_refused() -> Result<()> {
    let signer = fixed_signer("us-east-1", "2015-08-30T12:36:00Z")?;

    let req = Request::get("s3.amazonaws.com:443").body(Vec::<u8>::new())?;
    let err = signer.sign_http(req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(err.is_contract_violation());
    Ok(())
}
