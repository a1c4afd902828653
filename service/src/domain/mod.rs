//! Domain definitions.

pub mod blog;
pub mod cart;
pub mod category;
pub mod course;
pub mod material;
pub mod module;
pub mod subscription;
pub mod user;

pub use self::{
    blog::Blog, category::Category, course::Course, material::Material,
    module::Module, subscription::Subscription, user::User,
};
