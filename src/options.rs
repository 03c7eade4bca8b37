//! Optional request parameters and the defaulting cascade.
//!
//! Every capability has one canonical `*_with` operation taking an
//! [`Options`] (or [`ImageOptions`]) value, plus a convenience entry point
//! that passes `Options::default()`. Both reduce through the same steps:
//!
//! 1. typed models are encoded (raw JSON passes through unchanged);
//! 2. pagination is resolved: a missing start index becomes `0`, a missing
//!    page size becomes the endpoint default ([`DEFAULT_MAX_RESULTS`] for
//!    single listings, [`DEFAULT_BULK_MAX_RESULTS`] for bulk listings);
//! 3. fingerprint inclusion, sparsity, part of speech and context id stay
//!    absent unless the caller set them, so the server picks the default;
//! 4. options the endpoint does not take are dropped.
//!
//! The result is a single [`QueryParams`] value, so equivalent calls always
//! produce equal requests.

use retina_core::{ImageEncoding, ImagePlotShape, PosType, QueryParams};

/// Page size for listings about a single term, text or expression.
pub const DEFAULT_MAX_RESULTS: u32 = 10;
/// Page size for each result group of a bulk listing.
pub const DEFAULT_BULK_MAX_RESULTS: u32 = 20;
/// First result returned when no start index is given.
pub const DEFAULT_START_INDEX: u32 = 0;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page window. Each half is optional and resolved on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub start_index: Option<u32>,
    pub max_results: Option<u32>,
}

impl Pagination {
    pub fn new(start_index: u32, max_results: u32) -> Self {
        Self {
            start_index: Some(start_index),
            max_results: Some(max_results),
        }
    }

    /// `(start_index, max_results)` with the endpoint default filled in.
    pub fn resolve(self, default_max_results: u32) -> (u32, u32) {
        (
            self.start_index.unwrap_or(DEFAULT_START_INDEX),
            self.max_results.unwrap_or(default_max_results),
        )
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Optional parameters shared by the listing and expression endpoints.
///
/// ```
/// use retina::{Options, PosType};
///
/// let opts = Options::new().max_results(5).pos_type(PosType::Noun);
/// assert_eq!(opts.pagination.unwrap().start_index, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Options {
    pub pagination: Option<Pagination>,
    pub include_fingerprint: Option<bool>,
    pub sparsity: Option<f64>,
    pub pos_type: Option<PosType>,
    pub context_id: Option<u32>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, start_index: u32, max_results: u32) -> Self {
        self.pagination = Some(Pagination::new(start_index, max_results));
        self
    }

    pub fn start_index(mut self, start_index: u32) -> Self {
        self.pagination.get_or_insert_with(Pagination::default).start_index = Some(start_index);
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.pagination.get_or_insert_with(Pagination::default).max_results = Some(max_results);
        self
    }

    pub fn include_fingerprint(mut self, include: bool) -> Self {
        self.include_fingerprint = Some(include);
        self
    }

    pub fn sparsity(mut self, sparsity: f64) -> Self {
        self.sparsity = Some(sparsity);
        self
    }

    pub fn pos_type(mut self, pos_type: PosType) -> Self {
        self.pos_type = Some(pos_type);
        self
    }

    pub fn context_id(mut self, context_id: u32) -> Self {
        self.context_id = Some(context_id);
        self
    }

    /// Fold these options into `params`, keeping only what `accepts` allows.
    pub(crate) fn resolve(&self, accepts: Accepts, mut params: QueryParams) -> QueryParams {
        if let Some(default_max) = accepts.page {
            let (start, max) = self.pagination.unwrap_or_default().resolve(default_max);
            params.start_index = Some(start);
            params.max_results = Some(max);
        }
        if accepts.fingerprint {
            params.include_fingerprint = self.include_fingerprint;
        }
        if accepts.sparsity {
            params.sparsity = self.sparsity;
        }
        if accepts.pos_type {
            params.pos_type = self.pos_type;
        }
        if accepts.context_id {
            params.context_id = self.context_id;
        }
        params
    }
}

/// Which [`Options`] fields an endpoint takes. `page` carries the endpoint's
/// default page size when it is paginated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Accepts {
    pub page: Option<u32>,
    pub fingerprint: bool,
    pub sparsity: bool,
    pub pos_type: bool,
    pub context_id: bool,
}

impl Accepts {
    pub const SPARSITY: Accepts = Accepts {
        page: None,
        fingerprint: false,
        sparsity: true,
        pos_type: false,
        context_id: false,
    };

    /// Paginated listing that can embed fingerprints.
    pub const fn listing(default_max_results: u32) -> Accepts {
        Accepts {
            page: Some(default_max_results),
            fingerprint: true,
            sparsity: false,
            pos_type: false,
            context_id: false,
        }
    }

    pub const fn with_sparsity(self) -> Accepts {
        Accepts { sparsity: true, ..self }
    }

    pub const fn with_term_filters(self) -> Accepts {
        Accepts {
            pos_type: true,
            context_id: true,
            ..self
        }
    }
}

// ---------------------------------------------------------------------------
// Image options
// ---------------------------------------------------------------------------

/// Optional rendering parameters for the image endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageOptions {
    pub scalar: Option<u32>,
    pub shape: Option<ImagePlotShape>,
    pub encoding: Option<ImageEncoding>,
    pub sparsity: Option<f64>,
    /// Only honoured by the bulk image endpoint.
    pub include_fingerprint: Option<bool>,
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, scalar: u32) -> Self {
        self.scalar = Some(scalar);
        self
    }

    pub fn shape(mut self, shape: ImagePlotShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn encoding(mut self, encoding: ImageEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn sparsity(mut self, sparsity: f64) -> Self {
        self.sparsity = Some(sparsity);
        self
    }

    pub fn include_fingerprint(mut self, include: bool) -> Self {
        self.include_fingerprint = Some(include);
        self
    }

    pub(crate) fn resolve(&self, bulk: bool, mut params: QueryParams) -> QueryParams {
        params.image_scalar = self.scalar;
        params.plot_shape = self.shape;
        params.image_encoding = self.encoding;
        params.sparsity = self.sparsity;
        if bulk {
            params.include_fingerprint = self.include_fingerprint;
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
