//! Typed wrappers for every Ozon Seller API category.
//!
//! Each category is a thin struct over the shared
//! [`HttpClient`](crate::clients::HttpClient): its methods pick the endpoint
//! path and method, and forward the typed request and per-call
//! [`RequestOptions`](crate::clients::RequestOptions). Authentication,
//! retries and error translation all happen in the client, never here.
//!
//! Categories are obtained from [`OzonClient`](crate::OzonClient) accessors
//! rather than constructed directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use ozon_seller_api::categories::product::ProductInfoRequest;
//!
//! let info = client
//!     .product()
//!     .info_list(
//!         &ProductInfoRequest {
//!             offer_id: vec!["SKU-1".to_string()],
//!             ..ProductInfoRequest::default()
//!         },
//!         None,
//!     )
//!     .await?;
//! ```

pub mod analytics;
pub mod barcode;
pub mod beta_method;
pub mod brand;
pub mod cancellation;
pub mod category;
pub mod certification;
pub mod chat;
pub mod delivery_fbs;
pub mod delivery_rfbs;
pub mod digital;
pub mod fbo;
pub mod fbo_supply_request;
pub mod fbs;
pub mod fbs_rfbs_marks;
pub mod finance;
pub mod invoice;
pub mod pass;
pub mod polygon;
pub mod premium;
pub mod prices_stocks;
pub mod pricing_strategy;
pub mod product;
pub mod promos;
pub mod questions_answers;
pub mod rating;
pub mod report;
pub mod return_rfbs;
pub mod returns;
pub mod review;
pub mod seller;
pub mod supply_order;
pub mod warehouse;

pub use analytics::AnalyticsApi;
pub use barcode::BarcodeApi;
pub use beta_method::BetaMethodApi;
pub use brand::BrandApi;
pub use cancellation::CancellationApi;
pub use category::CategoryApi;
pub use certification::CertificationApi;
pub use chat::ChatApi;
pub use delivery_fbs::DeliveryFbsApi;
pub use delivery_rfbs::DeliveryRfbsApi;
pub use digital::DigitalApi;
pub use fbo::FboApi;
pub use fbo_supply_request::FboSupplyRequestApi;
pub use fbs::FbsApi;
pub use fbs_rfbs_marks::FbsRfbsMarksApi;
pub use finance::FinanceApi;
pub use invoice::InvoiceApi;
pub use pass::PassApi;
pub use polygon::PolygonApi;
pub use premium::PremiumApi;
pub use prices_stocks::PricesStocksApi;
pub use pricing_strategy::PricingStrategyApi;
pub use product::ProductApi;
pub use promos::PromosApi;
pub use questions_answers::QuestionsAnswersApi;
pub use rating::RatingApi;
pub use report::ReportApi;
pub use return_rfbs::ReturnRfbsApi;
pub use returns::ReturnsApi;
pub use review::ReviewApi;
pub use seller::SellerApi;
pub use supply_order::SupplyOrderApi;
pub use warehouse::WarehouseApi;
