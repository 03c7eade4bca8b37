//! Fingerprint images rendered by the server.
//!
//! Single-image endpoints return the PNG itself (or its base64 text when
//! [`ImageEncoding::Base64Png`](retina_core::ImageEncoding) is requested). The
//! bulk endpoint returns JSON, one [`Image`] per expression.

use retina_core::{
    encode_pair, paths, Accept, ApiRequest, BulkPayload, Image, Model, Payload, Result, Transport,
};

use crate::options::ImageOptions;
use crate::Client;

impl<T: Transport> Client<T> {
    pub fn image_for_expression<'a>(&self, expression: impl Into<Payload<'a>>) -> Result<Vec<u8>> {
        self.image_for_expression_with(expression, &ImageOptions::default())
    }

    pub fn image_for_expression_with<'a>(
        &self,
        expression: impl Into<Payload<'a>>,
        opts: &ImageOptions,
    ) -> Result<Vec<u8>> {
        let body = expression.into().into_body()?;
        let params = opts.resolve(false, self.params());
        self.call_bytes(ApiRequest::post(paths::IMAGE, params, body).accept(Accept::Png))
    }

    /// One image overlaying the fingerprints of `left` and `right`.
    pub fn compare_image(&self, left: &Model, right: &Model) -> Result<Vec<u8>> {
        self.compare_image_with(left, right, &ImageOptions::default())
    }

    pub fn compare_image_with(
        &self,
        left: &Model,
        right: &Model,
        opts: &ImageOptions,
    ) -> Result<Vec<u8>> {
        let body = encode_pair(left, right)?;
        let params = opts.resolve(false, self.params());
        self.call_bytes(ApiRequest::post(paths::IMAGE_COMPARE, params, body).accept(Accept::Png))
    }

    pub fn images_for_expressions<'a>(
        &self,
        expressions: impl Into<BulkPayload<'a>>,
    ) -> Result<Vec<Image>> {
        self.images_for_expressions_with(expressions, &ImageOptions::default())
    }

    /// One image per submitted expression, in submission order.
    pub fn images_for_expressions_with<'a>(
        &self,
        expressions: impl Into<BulkPayload<'a>>,
        opts: &ImageOptions,
    ) -> Result<Vec<Image>> {
        let (body, count) = expressions.into().into_body()?;
        let params = opts.resolve(true, self.params());
        self.call_bulk(ApiRequest::post(paths::IMAGE_BULK, params, body), count)
    }
}
