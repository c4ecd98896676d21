pub mod auth;
pub mod comment;
pub mod id;
pub mod image;
pub mod list;
pub mod post;
pub mod role;
pub mod setting;
pub mod timestamp;
pub mod user;

pub mod prelude {
    pub use crate::auth::{
        AuthResponse, InitAdminRequest, LoginRequest, RegisterRequest,
    };
    pub use crate::comment::{Comment, CreateCommentRequest};
    pub use crate::id::Id;
    pub use crate::image::Image;
    pub use crate::list::ListResponse;
    pub use crate::post::{AuthorSummary, Post, PostPayload, PostStatus};
    pub use crate::role::{
        CreateRoleRequest, Permission, Role, UpdateRoleRequest,
    };
    pub use crate::setting::{
        Setting, SettingsResponse, UpdateSettingRequest,
    };
    pub use crate::user::{SetUserRolesRequest, UpdateUserRequest, User};

    pub type PostList = ListResponse<Post>;
    pub type CommentList = ListResponse<Comment>;
    pub type UserList = ListResponse<User>;
    pub type RoleList = ListResponse<Role>;
}
