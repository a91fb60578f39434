use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use super::trie::{DisambiguationTrie, Node};
use super::DictError;
use crate::ambiguity::{AmbiguityMap, NUM_CLASSES};

const MAGIC: &[u8; 4] = b"JTDX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 4 + 4; // magic + version + body_len + crc32 = 13

#[derive(Serialize, Deserialize)]
struct Snapshot {
    groups: Vec<String>,
    nodes: Vec<Node>,
}

impl DisambiguationTrie {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let snapshot = Snapshot {
            groups: self.map.groups().iter().map(|g| g.to_string()).collect(),
            nodes: self.nodes.clone(),
        };
        let body = bincode::serialize(&snapshot).map_err(DictError::Serialize)?;
        let body_len: u32 = body
            .len()
            .try_into()
            .map_err(|_| DictError::Corrupt("body exceeds u32::MAX".to_string()))?;

        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body_len.to_le_bytes());
        buf.extend_from_slice(&crc32fast::hash(&body).to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }

        let body_len = read_u32(&data[5..9]) as usize;
        let stored = read_u32(&data[9..13]);
        let body = data
            .get(HEADER_SIZE..HEADER_SIZE + body_len)
            .ok_or(DictError::InvalidHeader)?;
        let computed = crc32fast::hash(body);
        if stored != computed {
            return Err(DictError::Checksum { stored, computed });
        }

        let snapshot: Snapshot = bincode::deserialize(body).map_err(DictError::Deserialize)?;
        let groups: [&str; NUM_CLASSES] = snapshot
            .groups
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| DictError::Corrupt("expected six letter groups".to_string()))?;
        let map = AmbiguityMap::new(groups).map_err(|e| DictError::Corrupt(e.to_string()))?;
        validate_nodes(&snapshot.nodes)?;

        Ok(Self {
            nodes: snapshot.nodes,
            map,
        })
    }

    /// Open a compiled snapshot, mapping the file instead of reading it.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is dropped once
        // deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}

/// Children always sit after their parent in the arena, which rules out
/// cycles; the root must stay bare.
fn validate_nodes(nodes: &[Node]) -> Result<(), DictError> {
    let Some(root) = nodes.first() else {
        return Err(DictError::Corrupt("no root node".to_string()));
    };
    if !root.terminals.is_empty() {
        return Err(DictError::Corrupt("root holds terminals".to_string()));
    }
    for (id, node) in nodes.iter().enumerate() {
        for edge in node.children.iter().flatten() {
            let child = edge.child as usize;
            if child <= id || child >= nodes.len() {
                return Err(DictError::Corrupt(format!(
                    "node {id} links to invalid node {child}"
                )));
            }
        }
    }
    Ok(())
}
