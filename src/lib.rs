pub mod assist_rankings;
pub mod dataset;
pub mod export;
pub mod filters;
pub mod http_client;
pub mod per90;
pub mod report;
pub mod shot_insights;
pub mod trends;
pub mod wiki_image;
