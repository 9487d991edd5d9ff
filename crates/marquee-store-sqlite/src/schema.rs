//! SQL schema for the Marquee SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS venues (
    venue_id      TEXT PRIMARY KEY,
    name          TEXT NOT NULL,
    city          TEXT NOT NULL,
    state         TEXT NOT NULL,   -- 2-letter code
    address       TEXT NOT NULL,
    phone         TEXT,
    genres        TEXT NOT NULL,   -- JSON array of strings
    image_link    TEXT,
    facebook_link TEXT
);

CREATE TABLE IF NOT EXISTS artists (
    artist_id     TEXT PRIMARY KEY,
    name          TEXT NOT NULL,
    city          TEXT NOT NULL,
    state         TEXT NOT NULL,   -- 2-letter code
    phone         TEXT,
    genres        TEXT NOT NULL,   -- JSON array of strings
    image_link    TEXT,
    facebook_link TEXT
);

-- Shows are deleted only by cascading with their parent venue or artist;
-- the store issues those deletes explicitly inside one transaction.
CREATE TABLE IF NOT EXISTS shows (
    show_id    TEXT PRIMARY KEY,
    artist_id  TEXT NOT NULL REFERENCES artists(artist_id),
    venue_id   TEXT NOT NULL REFERENCES venues(venue_id),
    start_time TEXT NOT NULL     -- stored as text, parsed on read
);

CREATE INDEX IF NOT EXISTS shows_venue_idx  ON shows(venue_id);
CREATE INDEX IF NOT EXISTS shows_artist_idx ON shows(artist_id);

PRAGMA user_version = 1;
";
