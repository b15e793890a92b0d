//! Wire-level constants shared across the SDK.

/// API version sent in `x-lod-version` and signed into every request.
pub const API_VERSION: &str = "2015-02-23";

/// Content type signed into the canonical string and sent on XML requests.
pub const CONTENT_TYPE_XML: &str = "text/xml";

/// Sentinel language code asking the server to detect the source language
/// of an uploaded file.
pub const DETECT_LANGUAGE: &str = "detect-language";

/// Scheme prefix of the `Authorization` header.
pub const AUTH_SCHEME: &str = "LOD1-BASE64-SHA256";

/// Header names covered by the signature, in the order the server expects.
pub const SIGNED_HEADERS: &str = "x-lod-timestamp;x-lod-version;accept";

/// Map a file name to the Content-Type header used when uploading its bytes.
///
/// Unknown extensions fall back to `text/plain`. Only the transmitted header
/// uses this value; the signature always covers `text/xml`.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name.rsplit('.').next().unwrap_or("");

    match extension {
        "csv" => "text/csv",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "flv" => "video/x-flv",
        "htm" | "html" => "text/html",
        "idml" | "inx" | "resw" | "resx" | "xlf" | "xliff" | "xml" => "application/xml",
        "ini" | "po" | "properties" | "srt" | "strings" | "txt" | "vtt" => "text/plain",
        "json" | "resjson" => "application/json",
        "m4v" => "video/x-m4v",
        "mif" => "application/vnd.mif",
        "mov" => "video/quicktime",
        "mp4" => "video/mp4",
        "pdf" => "application/pdf",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "psd" => "image/vnd.adobe.photoshop",
        "rtf" => "application/rtf",
        "wmv" => "video/x-ms-wmv",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "yml" | "yaml" => "text/yaml",
        _ => "text/plain",
    }
}
