use crate::http::request::Request;
use crate::http::response::{OCTET_STREAM, Response, ResponseOptions, TEXT_PLAIN};
use crate::store::FileStore;

/// `/` - empty 200 without a content type.
pub fn root(opts: &ResponseOptions) -> std::io::Result<Response> {
    Response::ok(opts, Vec::<u8>::new(), "")
}

/// `/echo/<text>` - echoes the rest of the path back as plain text.
pub fn echo(opts: &ResponseOptions, text: &str) -> std::io::Result<Response> {
    Response::ok(opts, text, TEXT_PLAIN)
}

/// `/user-agent` - reflects the client's `User-Agent` header.
pub fn user_agent(opts: &ResponseOptions, req: &Request) -> std::io::Result<Response> {
    Response::ok(opts, req.user_agent(), TEXT_PLAIN)
}

/// `GET /files/<name>` - file contents, or 404 on any file error.
pub async fn get_file(
    opts: &ResponseOptions,
    store: &FileStore,
    name: &str,
) -> std::io::Result<Response> {
    match store.read(name).await {
        Ok(contents) => Response::ok(opts, contents, OCTET_STREAM),
        Err(e) => {
            tracing::warn!(file = name, error = %e, "Could not read file");
            Ok(Response::not_found(opts))
        }
    }
}

/// `POST /files/<name>` - stores the first `Content-Length` body bytes.
///
/// Always answers 201; a failed write is only logged.
pub async fn post_file(store: &FileStore, name: &str, req: &Request) -> Response {
    let contents = req.declared_body();

    match store.write(name, &contents).await {
        Ok(()) => tracing::info!(file = name, bytes = contents.len(), "Stored file"),
        Err(e) => tracing::warn!(file = name, error = %e, "Could not write file"),
    }

    Response::created()
}
