use redb::TableDefinition;

/// Uploaded media records: uuid -> MediaRecord (msgpack)
pub const UPLOADS: TableDefinition<&str, &[u8]> = TableDefinition::new("uploads");

/// Partition index: "{category}-{parent_id}" -> msgpack Vec of upload UUIDs
pub const PARTITION_UPLOADS: TableDefinition<&str, &[u8]> =
    TableDefinition::new("partition_uploads");

/// Cover overrides: "{category}-{parent_id}" -> CoverOverride (msgpack)
pub const COVERS: TableDefinition<&str, &[u8]> = TableDefinition::new("covers");

/// Hidden static media: url -> unit (presence means hidden)
pub const HIDDEN_STATIC: TableDefinition<&str, ()> = TableDefinition::new("hidden_static");

/// Static caption overrides: url -> caption
pub const STATIC_CAPTIONS: TableDefinition<&str, &str> = TableDefinition::new("static_captions");
