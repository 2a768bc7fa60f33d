use futures::future::LocalBoxFuture;

use crate::domain::errors::DashboardError;

use super::DashboardPayload;

/// Where dashboard payloads come from.
///
/// The returned future is `'static` so the caller can drive it after the source
/// is borrowed again for the next request; it need not be `Send` because all
/// fetches run on the single UI event loop.
pub trait PayloadSource {
    fn fetch_payload(&self, url: &str) -> LocalBoxFuture<'static, Result<DashboardPayload, DashboardError>>;
}

impl<S: PayloadSource + ?Sized> PayloadSource for std::rc::Rc<S> {
    fn fetch_payload(&self, url: &str) -> LocalBoxFuture<'static, Result<DashboardPayload, DashboardError>> {
        (**self).fetch_payload(url)
    }
}
