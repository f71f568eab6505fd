//! Static reference data: industry labels and colors, country names,
//! region classification.
//!
//! Every lookup has a fallback; an unknown code is never an error.

pub mod countries;
pub mod industries;
pub mod regions;

pub use countries::{country_name, iso_name, slovak_name};
pub use industries::{group_color, industry_color, industry_meta, IndustryMeta};
pub use regions::{country_region, region_members, region_of};
