//! The [`OzonClient`] entry point.
//!
//! `OzonClient` is the composition root of the SDK: it validates the
//! configuration, builds one [`AuthManager`] and one [`HttpClient`], and
//! wires every API category to that single shared client. Beyond
//! construction it only hands out category accessors.
//!
//! # Example
//!
//! ```rust,no_run
//! use ozon_seller_api::{ApiKey, ClientId, OzonClient, OzonConfig};
//! use ozon_seller_api::types::EmptyRequest;
//!
//! # async fn run() -> Result<(), ozon_seller_api::OzonError> {
//! let config = OzonConfig::builder()
//!     .client_id(ClientId::new("123456"))
//!     .api_key(ApiKey::new("your-api-key"))
//!     .build()?;
//!
//! let client = OzonClient::new(config)?;
//! let info = client.seller().info(&EmptyRequest::default(), None).await?;
//! println!("{}", info.company.name);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::auth::AuthManager;
use crate::categories::{
    AnalyticsApi, BarcodeApi, BetaMethodApi, BrandApi, CancellationApi, CategoryApi,
    CertificationApi, ChatApi, DeliveryFbsApi, DeliveryRfbsApi, DigitalApi, FboApi,
    FboSupplyRequestApi, FbsApi, FbsRfbsMarksApi, FinanceApi, InvoiceApi, PassApi, PolygonApi,
    PremiumApi, PricesStocksApi, PricingStrategyApi, ProductApi, PromosApi, QuestionsAnswersApi,
    RatingApi, ReportApi, ReturnRfbsApi, ReturnsApi, ReviewApi, SellerApi, SupplyOrderApi,
    WarehouseApi,
};
use crate::clients::{HttpClient, Transport};
use crate::config::OzonConfig;
use crate::error::OzonError;

/// Client for the Ozon Seller API.
///
/// All categories share one [`HttpClient`], and therefore one connection
/// pool and one configuration. `OzonClient` is cheap to share behind an
/// `Arc` and safe to use from many tasks at once.
#[derive(Debug)]
pub struct OzonClient {
    config: Arc<OzonConfig>,
    http: Arc<HttpClient>,
    category: CategoryApi,
    product: ProductApi,
    prices_stocks: PricesStocksApi,
    pricing_strategy: PricingStrategyApi,
    barcode: BarcodeApi,
    warehouse: WarehouseApi,
    polygon: PolygonApi,
    fbo: FboApi,
    fbs: FbsApi,
    digital: DigitalApi,
    delivery_fbs: DeliveryFbsApi,
    delivery_rfbs: DeliveryRfbsApi,
    fbs_rfbs_marks: FbsRfbsMarksApi,
    pass: PassApi,
    returns: ReturnsApi,
    return_rfbs: ReturnRfbsApi,
    cancellation: CancellationApi,
    chat: ChatApi,
    invoice: InvoiceApi,
    brand: BrandApi,
    certification: CertificationApi,
    rating: RatingApi,
    analytics: AnalyticsApi,
    finance: FinanceApi,
    report: ReportApi,
    premium: PremiumApi,
    promos: PromosApi,
    supply_order: SupplyOrderApi,
    fbo_supply_request: FboSupplyRequestApi,
    review: ReviewApi,
    questions_answers: QuestionsAnswersApi,
    seller: SellerApi,
    beta_method: BetaMethodApi,
}

// Verify OzonClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OzonClient>();
};

impl OzonClient {
    /// Creates a client that talks to the network through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError::Configuration`] if the credentials are blank or
    /// the HTTP transport cannot be initialized. No request is made.
    pub fn new(config: OzonConfig) -> Result<Self, OzonError> {
        let config = Arc::new(config);
        let auth = AuthManager::new(Arc::clone(&config))?;
        let http = HttpClient::new(Arc::clone(&config), auth)?;
        Ok(Self::assemble(config, http))
    }

    /// Creates a client that sends every request through `transport`.
    ///
    /// Useful for tests and for routing requests through a custom stack.
    ///
    /// # Errors
    ///
    /// Returns [`OzonError::Configuration`] if the credentials are blank.
    pub fn with_transport(
        config: OzonConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, OzonError> {
        let config = Arc::new(config);
        let auth = AuthManager::new(Arc::clone(&config))?;
        let http = HttpClient::with_transport(Arc::clone(&config), auth, transport);
        Ok(Self::assemble(config, http))
    }

    fn assemble(config: Arc<OzonConfig>, http: HttpClient) -> Self {
        let http = Arc::new(http);
        tracing::debug!("Ozon client created for {}", config.base_url().host_name());

        Self {
            category: CategoryApi::new(Arc::clone(&http)),
            product: ProductApi::new(Arc::clone(&http)),
            prices_stocks: PricesStocksApi::new(Arc::clone(&http)),
            pricing_strategy: PricingStrategyApi::new(Arc::clone(&http)),
            barcode: BarcodeApi::new(Arc::clone(&http)),
            warehouse: WarehouseApi::new(Arc::clone(&http)),
            polygon: PolygonApi::new(Arc::clone(&http)),
            fbo: FboApi::new(Arc::clone(&http)),
            fbs: FbsApi::new(Arc::clone(&http)),
            digital: DigitalApi::new(Arc::clone(&http)),
            delivery_fbs: DeliveryFbsApi::new(Arc::clone(&http)),
            delivery_rfbs: DeliveryRfbsApi::new(Arc::clone(&http)),
            fbs_rfbs_marks: FbsRfbsMarksApi::new(Arc::clone(&http)),
            pass: PassApi::new(Arc::clone(&http)),
            returns: ReturnsApi::new(Arc::clone(&http)),
            return_rfbs: ReturnRfbsApi::new(Arc::clone(&http)),
            cancellation: CancellationApi::new(Arc::clone(&http)),
            chat: ChatApi::new(Arc::clone(&http)),
            invoice: InvoiceApi::new(Arc::clone(&http)),
            brand: BrandApi::new(Arc::clone(&http)),
            certification: CertificationApi::new(Arc::clone(&http)),
            rating: RatingApi::new(Arc::clone(&http)),
            analytics: AnalyticsApi::new(Arc::clone(&http)),
            finance: FinanceApi::new(Arc::clone(&http)),
            report: ReportApi::new(Arc::clone(&http)),
            premium: PremiumApi::new(Arc::clone(&http)),
            promos: PromosApi::new(Arc::clone(&http)),
            supply_order: SupplyOrderApi::new(Arc::clone(&http)),
            fbo_supply_request: FboSupplyRequestApi::new(Arc::clone(&http)),
            review: ReviewApi::new(Arc::clone(&http)),
            questions_answers: QuestionsAnswersApi::new(Arc::clone(&http)),
            seller: SellerApi::new(Arc::clone(&http)),
            beta_method: BetaMethodApi::new(Arc::clone(&http)),
            config,
            http,
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &OzonConfig {
        &self.config
    }

    /// Returns the shared HTTP client, for endpoints without a typed wrapper.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Description categories and attributes.
    #[must_use]
    pub const fn category(&self) -> &CategoryApi {
        &self.category
    }

    /// Product catalog.
    #[must_use]
    pub const fn product(&self) -> &ProductApi {
        &self.product
    }

    /// Prices and stocks.
    #[must_use]
    pub const fn prices_stocks(&self) -> &PricesStocksApi {
        &self.prices_stocks
    }

    /// Competitor pricing strategies.
    #[must_use]
    pub const fn pricing_strategy(&self) -> &PricingStrategyApi {
        &self.pricing_strategy
    }

    /// Barcodes.
    #[must_use]
    pub const fn barcode(&self) -> &BarcodeApi {
        &self.barcode
    }

    /// Warehouses and delivery methods.
    #[must_use]
    pub const fn warehouse(&self) -> &WarehouseApi {
        &self.warehouse
    }

    /// Express delivery polygons.
    #[must_use]
    pub const fn polygon(&self) -> &PolygonApi {
        &self.polygon
    }

    /// FBO postings.
    #[must_use]
    pub const fn fbo(&self) -> &FboApi {
        &self.fbo
    }

    /// FBS postings.
    #[must_use]
    pub const fn fbs(&self) -> &FbsApi {
        &self.fbs
    }

    /// Digital goods postings.
    #[must_use]
    pub const fn digital(&self) -> &DigitalApi {
        &self.digital
    }

    /// FBS hand-over acts.
    #[must_use]
    pub const fn delivery_fbs(&self) -> &DeliveryFbsApi {
        &self.delivery_fbs
    }

    /// rFBS delivery status updates.
    #[must_use]
    pub const fn delivery_rfbs(&self) -> &DeliveryRfbsApi {
        &self.delivery_rfbs
    }

    /// Exemplar marking for FBS and rFBS.
    #[must_use]
    pub const fn fbs_rfbs_marks(&self) -> &FbsRfbsMarksApi {
        &self.fbs_rfbs_marks
    }

    /// Warehouse entry passes.
    #[must_use]
    pub const fn pass(&self) -> &PassApi {
        &self.pass
    }

    /// FBO and FBS returns.
    #[must_use]
    pub const fn returns(&self) -> &ReturnsApi {
        &self.returns
    }

    /// rFBS return requests.
    #[must_use]
    pub const fn return_rfbs(&self) -> &ReturnRfbsApi {
        &self.return_rfbs
    }

    /// Conditional cancellations.
    #[must_use]
    pub const fn cancellation(&self) -> &CancellationApi {
        &self.cancellation
    }

    /// Chats.
    #[must_use]
    pub const fn chat(&self) -> &ChatApi {
        &self.chat
    }

    /// Customs invoices.
    #[must_use]
    pub const fn invoice(&self) -> &InvoiceApi {
        &self.invoice
    }

    /// Brand certification.
    #[must_use]
    pub const fn brand(&self) -> &BrandApi {
        &self.brand
    }

    /// Quality certificates.
    #[must_use]
    pub const fn certification(&self) -> &CertificationApi {
        &self.certification
    }

    /// Seller rating.
    #[must_use]
    pub const fn rating(&self) -> &RatingApi {
        &self.rating
    }

    /// Analytics.
    #[must_use]
    pub const fn analytics(&self) -> &AnalyticsApi {
        &self.analytics
    }

    /// Finance.
    #[must_use]
    pub const fn finance(&self) -> &FinanceApi {
        &self.finance
    }

    /// Reports.
    #[must_use]
    pub const fn report(&self) -> &ReportApi {
        &self.report
    }

    /// Premium subscriber methods.
    #[must_use]
    pub const fn premium(&self) -> &PremiumApi {
        &self.premium
    }

    /// Promotions.
    #[must_use]
    pub const fn promos(&self) -> &PromosApi {
        &self.promos
    }

    /// FBO supply orders.
    #[must_use]
    pub const fn supply_order(&self) -> &SupplyOrderApi {
        &self.supply_order
    }

    /// FBO supply request drafts.
    #[must_use]
    pub const fn fbo_supply_request(&self) -> &FboSupplyRequestApi {
        &self.fbo_supply_request
    }

    /// Reviews.
    #[must_use]
    pub const fn review(&self) -> &ReviewApi {
        &self.review
    }

    /// Questions and answers.
    #[must_use]
    pub const fn questions_answers(&self) -> &QuestionsAnswersApi {
        &self.questions_answers
    }

    /// Seller account.
    #[must_use]
    pub const fn seller(&self) -> &SellerApi {
        &self.seller
    }

    /// Beta methods.
    #[must_use]
    pub const fn beta_method(&self) -> &BetaMethodApi {
        &self.beta_method
    }
}
