//! YAML file loading module
//!
//! This module is the boundary between the filesystem and the registry:
//! it reads YAML documents, turns them into mappings, and feeds them
//! through `ConfigStore::load`.

pub mod yaml;
