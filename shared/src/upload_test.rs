use super::*;
use crate::error::ErrorKind;

#[test]
fn accepts_each_supported_type() {
    for mime in ["image/jpeg", "image/png", "image/webp"] {
        let candidate = UploadCandidate::new("photo", mime, 1024);
        let validated = candidate.validate(MAX_UPLOAD_BYTES).unwrap();
        assert_eq!(validated.kind.mime_type(), mime);
        assert_eq!(validated.size_bytes, 1024);
    }
}

#[test]
fn rejects_unsupported_types() {
    for mime in ["image/gif", "image/bmp", "application/pdf", "", "IMAGE/JPEG", "image/jpg"] {
        let err = UploadCandidate::new("file", mime, 10).validate(MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFileType, "mime {mime:?}");
    }
}

#[test]
fn limit_is_ten_mebibytes() {
    assert_eq!(MAX_UPLOAD_BYTES, 10_485_760);
}

#[test]
fn accepts_file_exactly_at_limit() {
    let candidate = UploadCandidate::new("big.png", "image/png", MAX_UPLOAD_BYTES);
    assert!(candidate.validate(MAX_UPLOAD_BYTES).is_ok());
}

#[test]
fn rejects_file_one_byte_over_limit() {
    let candidate = UploadCandidate::new("big.png", "image/png", MAX_UPLOAD_BYTES + 1);
    let err = candidate.validate(MAX_UPLOAD_BYTES).unwrap_err();
    assert_eq!(
        err,
        ClientError::FileTooLarge { size: MAX_UPLOAD_BYTES + 1, limit: MAX_UPLOAD_BYTES }
    );
    assert_eq!(err.user_message(), "File size exceeds 10MB limit");
}

#[test]
fn oversized_file_of_wrong_type_is_still_rejected() {
    let candidate = UploadCandidate::new("clip.gif", "image/gif", MAX_UPLOAD_BYTES * 2);
    let err = candidate.validate(MAX_UPLOAD_BYTES).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFileType);
    assert_eq!(err.user_message(), "Please upload a valid image file (JPEG, PNG, or WEBP)");
}

#[test]
fn extension_lookup_is_case_insensitive() {
    assert_eq!(ImageKind::from_extension("JPG"), Some(ImageKind::Jpeg));
    assert_eq!(ImageKind::from_extension("jpeg"), Some(ImageKind::Jpeg));
    assert_eq!(ImageKind::from_extension("webp"), Some(ImageKind::Webp));
    assert_eq!(ImageKind::from_extension("gif"), None);
}

#[test]
fn accept_list_names_all_types() {
    assert_eq!(ImageKind::accept_list(), "image/jpeg,image/png,image/webp");
}

#[test]
fn display_matches_mime() {
    assert_eq!(ImageKind::Png.to_string(), "image/png");
}
