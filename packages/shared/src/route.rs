//! Addressing scheme of the browser application.
//!
//! The index page lives at `/` and each room at `/r/{roomId}`, where the room
//! id is an opaque path segment handed out by the server.

use std::{fmt, str::FromStr};

use thiserror::Error;

const ROOM_PREFIX: &str = "/r/";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches path '{0}'")]
    NotFound(String),

    #[error("room path has an empty room id")]
    EmptyRoomId,
}

/// A navigable page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Room creation page
    Index,
    /// Chat page of one room
    Room { room_id: String },
}

impl Route {
    pub fn room(room_id: impl Into<String>) -> Self {
        Route::Room {
            room_id: room_id.into(),
        }
    }

    /// Route name, as registered with the browser router.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::Room { .. } => "room",
        }
    }

    pub fn room_id(&self) -> Option<&str> {
        match self {
            Route::Index => None,
            Route::Room { room_id } => Some(room_id),
        }
    }

    /// Match a path against the known routes.
    ///
    /// A query string or fragment is ignored, as is a single trailing slash on
    /// a room path.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if path == "/" || path.is_empty() {
            return Ok(Route::Index);
        }

        let Some(rest) = path.strip_prefix(ROOM_PREFIX) else {
            return Err(RouteError::NotFound(path.to_string()));
        };
        let room_id = rest.strip_suffix('/').unwrap_or(rest);
        if room_id.is_empty() {
            return Err(RouteError::EmptyRoomId);
        }
        if room_id.contains('/') {
            return Err(RouteError::NotFound(path.to_string()));
        }
        Ok(Route::room(room_id))
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Index => f.write_str("/"),
            Route::Room { room_id } => write!(f, "{ROOM_PREFIX}{room_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        // テスト項目: ルートパスはインデックスページになる
        assert_eq!(Route::parse("/"), Ok(Route::Index));
        assert_eq!(Route::parse("/?ref=home"), Ok(Route::Index));
    }

    #[test]
    fn test_parse_room() {
        // テスト項目: /r/{roomId} はルームページになる
        // when (操作):
        let route = Route::parse("/r/7c1e5b0a-1d2f-4c3b-9a8e-0f1e2d3c4b5a").unwrap();

        // then (期待する結果):
        assert_eq!(route.name(), "room");
        assert_eq!(
            route.room_id(),
            Some("7c1e5b0a-1d2f-4c3b-9a8e-0f1e2d3c4b5a")
        );
    }

    #[test]
    fn test_parse_room_with_trailing_slash() {
        // テスト項目: 末尾のスラッシュは無視される
        assert_eq!(Route::parse("/r/abc/"), Ok(Route::room("abc")));
    }

    #[test]
    fn test_parse_empty_room_id_fails() {
        // テスト項目: 空のルーム ID はエラーになる
        assert_eq!(Route::parse("/r/"), Err(RouteError::EmptyRoomId));
    }

    #[test]
    fn test_parse_unknown_path_fails() {
        // テスト項目: 未知のパスは NotFound になる
        assert_eq!(
            Route::parse("/rooms/abc"),
            Err(RouteError::NotFound("/rooms/abc".to_string()))
        );
        assert_eq!(
            Route::parse("/r/abc/extra"),
            Err(RouteError::NotFound("/r/abc/extra".to_string()))
        );
    }

    #[test]
    fn test_display_renders_paths() {
        // テスト項目: Display はパスを出力する
        assert_eq!(Route::Index.to_string(), "/");
        assert_eq!(Route::room("abc").to_string(), "/r/abc");
    }
}
