pub mod client;
pub mod video_recommender;
