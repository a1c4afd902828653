//! [`Command`] definition.

pub mod add_cart_item;
pub mod attach_material_file;
pub mod create_blog;
pub mod create_category;
pub mod create_material;
pub mod create_module;
pub mod deactivate_category;
pub mod delete_blog;
pub mod delete_material;
pub mod delete_module;
pub mod remove_cart_item;
pub mod resolve_cart_id;
pub mod update_blog;
pub mod update_cart_item_quantity;
pub mod update_category;
pub mod update_module;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_cart_item::AddCartItem, attach_material_file::AttachMaterialFile,
    create_blog::CreateBlog, create_category::CreateCategory,
    create_material::CreateMaterial, create_module::CreateModule,
    deactivate_category::DeactivateCategory, delete_blog::DeleteBlog,
    delete_material::DeleteMaterial, delete_module::DeleteModule,
    remove_cart_item::RemoveCartItem, resolve_cart_id::ResolveCartId,
    update_blog::UpdateBlog,
    update_cart_item_quantity::UpdateCartItemQuantity,
    update_category::UpdateCategory, update_module::UpdateModule,
};
