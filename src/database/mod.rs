pub mod models;
pub mod outfit_repo;
pub mod settings_repo;
pub mod wardrobe_repo;
