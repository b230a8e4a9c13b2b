// Hard cap on a single image payload, mirrored by the client-side check.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

// Outer request body cap. One MiB above the image cap so multipart framing
// never trips the transport layer before the handler's own size check runs.
pub const SERVER_REQUEST_BODY_LIMIT: usize = MAX_IMAGE_BYTES + 1024 * 1024;
