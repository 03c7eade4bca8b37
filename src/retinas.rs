use retina_core::{paths, ApiRequest, QueryParams, Result, Retina, Transport};

use crate::Client;

impl<T: Transport> Client<T> {
    /// Every retina the server hosts. Not scoped to the configured retina.
    pub fn retinas(&self) -> Result<Vec<Retina>> {
        self.call(ApiRequest::get(paths::RETINAS, QueryParams::default()))
    }
}
