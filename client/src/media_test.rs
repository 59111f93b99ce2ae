use super::*;

#[test]
fn data_url_encodes_payload() {
    assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
}

#[tokio::test]
async fn file_mime_is_guessed_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("pixel.png");
    std::fs::write(&png, [0x89, b'P', b'N', b'G']).unwrap();
    let url = data_url_from_file(&png).await.unwrap();
    assert!(url.starts_with("data:image/png;base64,"), "{url}");

    let unknown = dir.path().join("blob.zzz-unknown");
    std::fs::write(&unknown, b"x").unwrap();
    assert_eq!(data_url_from_file(&unknown).await.unwrap(), "data:application/octet-stream;base64,eA==");
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(data_url_from_file(&dir.path().join("absent.png")).await.is_err());
}
