//! Admin identity port — decides whether a request carries admin rights.

/// Verifies the credentials presented with an admin request.
///
/// `credentials` is the raw `Authorization` header value, if any. The check
/// happens before any input validation.
pub trait AdminVerifier {
    fn verify(&self, credentials: Option<&str>) -> bool;
}

impl<T: AdminVerifier + ?Sized> AdminVerifier for std::sync::Arc<T> {
    fn verify(&self, credentials: Option<&str>) -> bool {
        (**self).verify(credentials)
    }
}
