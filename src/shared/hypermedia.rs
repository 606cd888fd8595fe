//! Hypermedia Links
//!
//! Static `(resource, action) -> links` table attached to response envelopes.
//! Each link serializes as a single-key object: `{"self": {"href": "/chats", "method": "POST"}}`.

use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

/// A link to a related operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub rel: &'static str,
    pub href: &'static str,
    pub method: &'static str,
}

struct LinkTarget<'a>(&'a Link);

impl Serialize for LinkTarget<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut target = serializer.serialize_struct("LinkTarget", 2)?;
        target.serialize_field("href", self.0.href)?;
        target.serialize_field("method", self.0.method)?;
        target.end()
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.rel, &LinkTarget(self))?;
        map.end()
    }
}

/// Resources that carry hypermedia links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Auth,
    Chat,
    Group,
    Message,
    User,
}

/// Operations a link table is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Signup,
    Create,
    Read,
    Update,
    Delete,
    AllChats,
    AllGroups,
    AllMessages,
    AllUsers,
}

impl FromStr for Resource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Auth" => Ok(Self::Auth),
            "Chat" => Ok(Self::Chat),
            "Group" => Ok(Self::Group),
            "Message" => Ok(Self::Message),
            "User" => Ok(Self::User),
            _ => Err(()),
        }
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Self::Login),
            "signup" => Ok(Self::Signup),
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "allChats" => Ok(Self::AllChats),
            "allGroups" => Ok(Self::AllGroups),
            "allMessages" => Ok(Self::AllMessages),
            "allUsers" => Ok(Self::AllUsers),
            _ => Err(()),
        }
    }
}

const fn link(rel: &'static str, href: &'static str, method: &'static str) -> Link {
    Link { rel, href, method }
}

const AUTH_LOGIN: &[Link] = &[
    link("self", "/auth/login", "POST"),
    link("signup", "/auth/signup", "POST"),
];
const AUTH_SIGNUP: &[Link] = &[
    link("self", "/auth/signup", "POST"),
    link("login", "/auth/login", "POST"),
];

const CHAT_CREATE: &[Link] = &[
    link("self", "/chats", "POST"),
    link("allChats", "/chats", "GET"),
];
const CHAT_ALL: &[Link] = &[
    link("self", "/chats", "GET"),
    link("create", "/chats", "POST"),
];
const CHAT_READ: &[Link] = &[
    link("self", "/chats/{id}", "GET"),
    link("update", "/chats/{id}", "PUT"),
    link("delete", "/chats/{id}", "DELETE"),
    link("create", "/chats", "POST"),
];
const CHAT_UPDATE: &[Link] = &[
    link("self", "/chats/{id}", "PUT"),
    link("read", "/chats/{id}", "GET"),
    link("delete", "/chats/{id}", "DELETE"),
    link("create", "/chats", "POST"),
];
const CHAT_DELETE: &[Link] = &[
    link("self", "/chats/{id}", "DELETE"),
    link("read", "/chats/{id}", "GET"),
    link("update", "/chats/{id}", "PUT"),
    link("create", "/chats", "POST"),
];

const GROUP_CREATE: &[Link] = &[
    link("self", "/groups", "POST"),
    link("allGroups", "/groups", "GET"),
];
const GROUP_ALL: &[Link] = &[
    link("self", "/groups", "GET"),
    link("create", "/groups", "POST"),
];
const GROUP_READ: &[Link] = &[
    link("self", "/groups/{id}", "GET"),
    link("update", "/groups/{id}", "PUT"),
    link("delete", "/groups/{id}", "DELETE"),
];
const GROUP_UPDATE: &[Link] = &[
    link("self", "/groups/{id}", "PUT"),
    link("read", "/groups/{id}", "GET"),
    link("delete", "/groups/{id}", "DELETE"),
];
const GROUP_DELETE: &[Link] = &[
    link("self", "/groups/{id}", "DELETE"),
    link("read", "/groups/{id}", "GET"),
    link("update", "/groups/{id}", "PUT"),
    link("create", "/groups", "POST"),
];

const MESSAGE_CREATE: &[Link] = &[
    link("self", "/messages", "POST"),
    link("allMessages", "/messages", "GET"),
];
const MESSAGE_ALL: &[Link] = &[
    link("self", "/messages", "GET"),
    link("create", "/messages", "POST"),
];
const MESSAGE_READ: &[Link] = &[
    link("self", "/messages/{id}", "GET"),
    link("update", "/messages/{id}", "PUT"),
    link("delete", "/messages/{id}", "DELETE"),
];
const MESSAGE_UPDATE: &[Link] = &[
    link("self", "/messages/{id}", "PUT"),
    link("read", "/messages/{id}", "GET"),
    link("delete", "/messages/{id}", "DELETE"),
];
const MESSAGE_DELETE: &[Link] = &[
    link("self", "/messages/{id}", "DELETE"),
    link("create", "/messages", "POST"),
];

const USER_CREATE: &[Link] = &[
    link("self", "/users", "POST"),
    link("allUsers", "/users", "GET"),
];
const USER_ALL: &[Link] = &[
    link("self", "/users", "GET"),
    link("create", "/users", "POST"),
];
const USER_READ: &[Link] = &[
    link("self", "/users/{id}", "GET"),
    link("update", "/users/{id}", "PUT"),
    link("delete", "/users/{id}", "DELETE"),
];
const USER_UPDATE: &[Link] = &[
    link("self", "/users/{id}", "PUT"),
    link("read", "/users/{id}", "GET"),
    link("delete", "/users/{id}", "DELETE"),
];
const USER_DELETE: &[Link] = &[
    link("self", "/users/{id}", "DELETE"),
    link("create", "/users", "POST"),
];

/// Links for `(resource, action)`; empty when the pair has no entry.
pub fn get_hyperlinks(resource: Resource, action: Action) -> &'static [Link] {
    use Action::*;

    match (resource, action) {
        (Resource::Auth, Login) => AUTH_LOGIN,
        (Resource::Auth, Signup) => AUTH_SIGNUP,

        (Resource::Chat, Create) => CHAT_CREATE,
        (Resource::Chat, AllChats) => CHAT_ALL,
        (Resource::Chat, Read) => CHAT_READ,
        (Resource::Chat, Update) => CHAT_UPDATE,
        (Resource::Chat, Delete) => CHAT_DELETE,

        (Resource::Group, Create) => GROUP_CREATE,
        (Resource::Group, AllGroups) => GROUP_ALL,
        (Resource::Group, Read) => GROUP_READ,
        (Resource::Group, Update) => GROUP_UPDATE,
        (Resource::Group, Delete) => GROUP_DELETE,

        (Resource::Message, Create) => MESSAGE_CREATE,
        (Resource::Message, AllMessages) => MESSAGE_ALL,
        (Resource::Message, Read) => MESSAGE_READ,
        (Resource::Message, Update) => MESSAGE_UPDATE,
        (Resource::Message, Delete) => MESSAGE_DELETE,

        (Resource::User, Create) => USER_CREATE,
        (Resource::User, AllUsers) => USER_ALL,
        (Resource::User, Read) => USER_READ,
        (Resource::User, Update) => USER_UPDATE,
        (Resource::User, Delete) => USER_DELETE,

        _ => &[],
    }
}

/// String-keyed lookup, e.g. `("Chat", "allChats")`.
pub fn get_hyperlinks_by_name(resource: &str, action: &str) -> &'static [Link] {
    match (resource.parse(), action.parse()) {
        (Ok(resource), Ok(action)) => get_hyperlinks(resource, action),
        _ => &[],
    }
}
