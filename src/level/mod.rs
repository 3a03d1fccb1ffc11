//! The level container.
//!
//! A [`Level`] owns its blocks under randomly minted UIDs, keeps them in
//! insertion order and tracks which completion star is which. It checks
//! what a single block cannot check on its own: whether the target game
//! version knows the kind, and whether portal destinations point at portals
//! already in the level.
//!
//! # Example
//!
//! ```ignore
//! use bopjson::prelude::*;
//!
//! let mut level = Level::new("Bopimo Template", "Made in Rust");
//! let plate = Primitive::shaped(Shape::Cylinder)
//!     .with_position((0.0, -6.0, 0.0))
//!     .with_scale((250.0, 6.0, 250.0));
//! let uid = level.add_object(plate)?;
//! level.get_object_mut(uid).unwrap().base_mut().name = "Baseplate".into();
//! ```

mod uid;

pub use uid::{RandomUids, Uid, UidSource, MAX_UID_ATTEMPTS};

use std::collections::HashMap;
use std::fmt;

use time::OffsetDateTime;
use tracing::debug;

use crate::block::{Attributes, Block};
use crate::core::{GameVersion, Music, Sky, Weather};
use crate::util::{Color, Error, Int32Array, Result};

/// Blocks beyond this count cannot be published online.
pub const SERVER_BLOCK_LIMIT: usize = 2048;

/// Level-wide settings written as `level_*` keys.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelSettings {
    /// [`Music`] codes, played in order.
    pub music: Int32Array,
    /// Lives per attempt; 0 is unlimited.
    pub lives: i32,
    pub players_damage_players: bool,
    /// [`Sky`] code.
    pub sky: i32,
    pub sky_energy: f64,
    pub ambient_color: Color,
    /// [`Weather`] code.
    pub weather: i32,
    pub fog_enabled: bool,
    pub fog_distance: i32,
    pub fog_color: Color,
    pub gravity: f64,
    /// Height below which players die.
    pub death_plane: f64,
}

impl Default for LevelSettings {
    fn default() -> Self {
        let music = [Music::Serene, Music::SwayingDreams, Music::PlayfulWaltz];
        Self {
            music: Int32Array::from_values(music.map(Music::code)).unwrap_or_default(),
            lives: 0,
            players_damage_players: true,
            sky: Sky::Day.code(),
            sky_energy: 1.0,
            ambient_color: Color::BLACK,
            weather: Weather::Clear.code(),
            fog_enabled: false,
            fog_distance: 0,
            fog_color: Color::rgb(128, 128, 128),
            gravity: 105.0,
            death_plane: -1000.0,
        }
    }
}

impl LevelSettings {
    /// Replace the playlist.
    pub fn set_music<I, M>(&mut self, tracks: I) -> Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Into<i128>,
    {
        self.music = Int32Array::from_values(tracks)?;
        Ok(())
    }
}

/// A Bopimo level.
pub struct Level {
    /// Version reported in `GAME_VERSION`. Gates which kinds may be added.
    pub game_version: GameVersion,
    /// Captured at construction; written as `TIME_OF_SAVE` (UTC).
    pub time_of_save: OffsetDateTime,
    pub name: String,
    pub description: String,
    pub settings: LevelSettings,
    blocks: Vec<(Uid, Block)>,
    index: HashMap<Uid, usize>,
    /// Star UIDs; a star's position here is its star id.
    stars: Vec<Uid>,
    uids: Box<dyn UidSource>,
}

impl Default for Level {
    fn default() -> Self {
        Self::new("My Bopimo Level", "Autogenerated with bopjson")
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("game_version", &self.game_version)
            .field("name", &self.name)
            .field("blocks", &self.blocks.len())
            .field("stars", &self.stars.len())
            .finish_non_exhaustive()
    }
}

impl Level {
    /// Empty level with entropy-seeded UIDs.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_uid_source(name, description, RandomUids::from_entropy())
    }

    /// Empty level whose UIDs follow `seed`.
    pub fn with_seed(name: impl Into<String>, description: impl Into<String>, seed: u64) -> Self {
        Self::with_uid_source(name, description, RandomUids::seeded(seed))
    }

    pub fn with_uid_source(
        name: impl Into<String>,
        description: impl Into<String>,
        uids: impl UidSource + 'static,
    ) -> Self {
        Self {
            game_version: GameVersion::LATEST,
            time_of_save: OffsetDateTime::now_utc(),
            name: name.into(),
            description: description.into(),
            settings: LevelSettings::default(),
            blocks: Vec::new(),
            index: HashMap::new(),
            stars: Vec::new(),
            uids: Box::new(uids),
        }
    }

    /// Check a block against the level before it is accepted.
    fn check(&self, block: &Block) -> Result<()> {
        block.validate()?;
        let required = block.min_version();
        if required > self.game_version {
            return Err(Error::UnsupportedVersion {
                kind: block.kind_name(),
                required: required.to_string(),
                level: self.game_version.to_string(),
            });
        }
        if let Some(portal) = block.as_portal() {
            for dest in portal.destinations.iter() {
                if let Some(reason) = self.destination_problem(dest) {
                    return Err(Error::InvalidDestination {
                        portal: portal.base.name.clone(),
                        destination: dest,
                        reason,
                    });
                }
            }
        }
        Ok(())
    }

    /// Why `dest` is not a usable portal destination, if it is not.
    pub(crate) fn destination_problem(&self, dest: i64) -> Option<&'static str> {
        let target = Uid::try_from(dest).ok().and_then(|uid| self.get_object(uid));
        match target {
            None => Some("no object with this uid in the level"),
            Some(Block::Portal(_)) => None,
            Some(_) => Some("destination is not a portal"),
        }
    }

    fn mint_uid(&mut self) -> Result<Uid> {
        for attempt in 0..MAX_UID_ATTEMPTS {
            let uid = self.uids.next_uid();
            if uid != 0 && !self.index.contains_key(&uid) {
                return Ok(uid);
            }
            debug!(uid, attempt, "uid collision, drawing again");
        }
        Err(Error::UidExhausted {
            attempts: MAX_UID_ATTEMPTS,
        })
    }

    /// Add a block and return its new UID.
    ///
    /// The level takes ownership; clone first to keep building from the
    /// same block. A clone has its own position track.
    pub fn add_object(&mut self, block: impl Into<Block>) -> Result<Uid> {
        let block = block.into();
        self.check(&block)?;
        let uid = self.mint_uid()?;
        if matches!(block, Block::CompletionStar(_)) {
            self.stars.push(uid);
        }
        self.index.insert(uid, self.blocks.len());
        self.blocks.push((uid, block));
        Ok(uid)
    }

    /// Add blocks in order. Stops at the first rejected block; the ones
    /// before it stay in the level.
    pub fn add_objects<I, B>(&mut self, blocks: I) -> Result<Vec<Uid>>
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        blocks.into_iter().map(|b| self.add_object(b)).collect()
    }

    /// Remove and return the block under `uid`.
    pub fn remove_object(&mut self, uid: Uid) -> Result<Block> {
        let pos = self.index.remove(&uid).ok_or(Error::ObjectNotFound(uid))?;
        let (_, block) = self.blocks.remove(pos);
        for (later, _) in &self.blocks[pos..] {
            if let Some(i) = self.index.get_mut(later) {
                *i -= 1;
            }
        }
        self.stars.retain(|&s| s != uid);
        Ok(block)
    }

    pub fn get_object(&self, uid: Uid) -> Option<&Block> {
        self.index.get(&uid).map(|&i| &self.blocks[i].1)
    }

    pub fn get_object_mut(&mut self, uid: Uid) -> Option<&mut Block> {
        let i = *self.index.get(&uid)?;
        Some(&mut self.blocks[i].1)
    }

    pub fn contains(&self, uid: Uid) -> bool {
        self.index.contains_key(&uid)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Uid, &Block)> + '_ {
        self.blocks.iter().map(|(uid, block)| (*uid, block))
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    /// Star id of the completion star under `uid`.
    pub fn star_id(&self, uid: Uid) -> Option<usize> {
        self.stars.iter().position(|&s| s == uid)
    }
}
