//! SQL schema for the pessoas SQLite store.
//!
//! Executed once at connection startup. The version is recorded in
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are insert-only through this service.
CREATE TABLE IF NOT EXISTS pessoas (
    id          TEXT PRIMARY KEY,       -- hyphenated lowercase UUID
    apelido     TEXT NOT NULL UNIQUE,
    nome        TEXT NOT NULL,
    nascimento  TEXT NOT NULL,          -- YYYY-MM-DD
    stack       TEXT                    -- JSON array of strings, or NULL
);

-- Trigram index over apelido, nome and stack entries. The rowid matches the
-- rowid of the corresponding row in `pessoas`.
CREATE VIRTUAL TABLE IF NOT EXISTS pessoas_busca USING fts5(
    busca,
    tokenize = 'trigram case_sensitive 1'
);

CREATE TRIGGER IF NOT EXISTS pessoas_busca_insert AFTER INSERT ON pessoas
BEGIN
    INSERT INTO pessoas_busca (rowid, busca)
    VALUES (
        new.rowid,
        new.apelido || ' ' || new.nome || COALESCE(
            ' ' || (SELECT group_concat(value, ' ') FROM json_each(new.stack)),
            ''
        )
    );
END;

PRAGMA user_version = 1;
";
