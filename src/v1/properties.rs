/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Permission scopes a user can grant to the application.
///
/// To write data on behalf of a user or to access their private data the scope
/// has to be requested during authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Scope {
    /// Default. Read public data.
    Public,
    /// Access user's private data.
    ReadUser,
    /// Update the user's profile.
    WriteUser,
    /// Read private data from the user's photos.
    ReadPhotos,
    /// Update photos on the user's behalf.
    WritePhotos,
    /// Like or unlike a photo on the user's behalf.
    WriteLikes,
    /// Follow or unfollow a user on the user's behalf.
    WriteFollowers,
    /// View a user's private collections.
    ReadCollections,
    /// Create and update a user's collections.
    WriteCollections,
}

/// Sort order for list endpoints (`order_by`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum OrderBy {
    Latest,
    Oldest,
    Popular,
    Views,
    Downloads,
}

/// Photo orientation filter (`orientation`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}
