//! `TTP0.bin`: the on-disk layout for a built [`super::ProbabilityTable`].

use super::table::ProbabilityTable;
use crate::cards::bet::BET_NB;
use crate::cards::{CARD_NB, HAND_NB};
use crate::error::Error;
use crate::error::Result;
use byteorder::LittleEndian;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

const MAGIC: &[u8; 4] = b"TTP0";
const VERSION: u32 = 1;
const SIZES: usize = CARD_NB + 1;

impl ProbabilityTable {
    /// Loads a table previously written by [`Self::save`]. Fails with
    /// [`Error::FormatError`] on a magic mismatch, [`Error::VersionMismatch`]
    /// or [`Error::DimensionMismatch`] on a stale/foreign artifact.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("loading probability table: {}", path.display());
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(Error::FormatError {
                expected: "TTP0",
                found: String::from_utf8_lossy(&magic).into_owned(),
            });
        }
        let version = reader.read_u32::<LittleEndian>()?;
        if version != VERSION {
            return Err(Error::VersionMismatch {
                expected: VERSION,
                found: version,
            });
        }
        let bets = reader.read_u32::<LittleEndian>()?;
        if bets as usize != BET_NB {
            return Err(Error::DimensionMismatch {
                what: "bets",
                expected: BET_NB as u32,
                found: bets,
            });
        }
        let cards_plus_1 = reader.read_u32::<LittleEndian>()?;
        if cards_plus_1 as usize != SIZES {
            return Err(Error::DimensionMismatch {
                what: "cards_plus_1",
                expected: SIZES as u32,
                found: cards_plus_1,
            });
        }
        let hands = reader.read_u32::<LittleEndian>()?;
        if hands as usize != HAND_NB {
            return Err(Error::DimensionMismatch {
                what: "hands",
                expected: HAND_NB as u32,
                found: hands,
            });
        }

        let total = BET_NB * SIZES * HAND_NB;
        let mut payload = vec![0i32; total].into_boxed_slice();
        reader.read_i32_into::<LittleEndian>(&mut payload)?;
        log::info!("probability table loaded: {} entries", total);
        Ok(Self::from_payload(payload))
    }

    /// Writes this table to `path` in the `TTP0.bin` layout (little-endian).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::info!("saving probability table: {}", path.display());
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        writer.write_u32::<LittleEndian>(VERSION)?;
        writer.write_u32::<LittleEndian>(BET_NB as u32)?;
        writer.write_u32::<LittleEndian>(SIZES as u32)?;
        writer.write_u32::<LittleEndian>(HAND_NB as u32)?;
        for &value in self.payload().iter() {
            writer.write_i32::<LittleEndian>(value)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Bet;
    use crate::cards::Hand;
    use crate::cards::rank::Rank;

    #[test]
    fn round_trip_preserves_values() {
        let built = ProbabilityTable::build();
        let dir = std::env::temp_dir();
        let path = dir.join(format!("ttp0_roundtrip_{}.bin", std::process::id()));

        built.save(&path).unwrap();
        let loaded = ProbabilityTable::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            built.completion_count(Bet::High(Rank::Nine), 1, Hand::EMPTY).unwrap(),
            loaded.completion_count(Bet::High(Rank::Nine), 1, Hand::EMPTY).unwrap()
        );
    }

    #[test]
    fn bad_magic_is_rejected() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("ttp0_badmagic_{}.bin", std::process::id()));
        std::fs::write(&path, b"XXXXgarbage").unwrap();
        let result = ProbabilityTable::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(Error::FormatError { .. })));
    }
}
