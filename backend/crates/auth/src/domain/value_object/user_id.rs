//! User ID: typed UUID over the kernel `Id` wrapper

use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;
