//! `HCL0.bin`: the on-disk layout for a built [`super::HandCluster`] grid.

use super::kmeans::Cluster;
use super::point::ClusterPoint;
use super::HandCluster;
use super::{OPP_SIZES, OWN_SIZES};
use crate::cards::bet::BET_NB;
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

const MAGIC: &[u8; 4] = b"HCL0";
const VERSION: u32 = 1;

fn write_point(writer: &mut impl Write, point: &ClusterPoint) -> Result<()> {
    for &f in point.features.iter() {
        writer.write_f64::<LittleEndian>(f)?;
    }
    writer.write_i32::<LittleEndian>(point.hand_index)?;
    writer.write_i32::<LittleEndian>(point.opp_size)?;
    Ok(())
}

fn read_point(reader: &mut impl Read) -> Result<ClusterPoint> {
    let mut features = [0.0; BET_NB];
    for f in features.iter_mut() {
        *f = reader.read_f64::<LittleEndian>()?;
    }
    let hand_index = reader.read_i32::<LittleEndian>()?;
    let opp_size = reader.read_i32::<LittleEndian>()?;
    Ok(ClusterPoint {
        features,
        hand_index,
        opp_size,
    })
}

impl HandCluster {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::info!("saving hand clusters: {}", path.display());
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        writer.write_u32::<LittleEndian>(VERSION)?;
        writer.write_u32::<LittleEndian>(OWN_SIZES as u32)?;
        writer.write_u32::<LittleEndian>(OPP_SIZES as u32)?;

        for row in &self.grid {
            for cluster in row {
                writer.write_u32::<LittleEndian>(cluster.blocks.len() as u32)?;
                for block in &cluster.blocks {
                    writer.write_u32::<LittleEndian>(block.len() as u32)?;
                    for point in block {
                        write_point(&mut writer, point)?;
                    }
                }
                writer.write_u32::<LittleEndian>(cluster.prefix_sums.len() as u32)?;
                for &prefix in &cluster.prefix_sums {
                    writer.write_i32::<LittleEndian>(prefix as i32)?;
                }
                writer.write_u32::<LittleEndian>(cluster.centers.len() as u32)?;
                for center in &cluster.centers {
                    write_point(&mut writer, center)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("loading hand clusters: {}", path.display());
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(Error::FormatError {
                expected: "HCL0",
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
        let hand_sizes = reader.read_u32::<LittleEndian>()?;
        if hand_sizes as usize != OWN_SIZES {
            return Err(Error::DimensionMismatch {
                what: "hand_sizes",
                expected: OWN_SIZES as u32,
                found: hand_sizes,
            });
        }
        let card_sizes = reader.read_u32::<LittleEndian>()?;
        if card_sizes as usize != OPP_SIZES {
            return Err(Error::DimensionMismatch {
                what: "card_sizes",
                expected: OPP_SIZES as u32,
                found: card_sizes,
            });
        }

        let mut grid = Vec::with_capacity(OWN_SIZES);
        for _ in 0..OWN_SIZES {
            let mut row = Vec::with_capacity(OPP_SIZES);
            for _ in 0..OPP_SIZES {
                let n_blocks = reader.read_u32::<LittleEndian>()? as usize;
                let mut blocks = Vec::with_capacity(n_blocks);
                for _ in 0..n_blocks {
                    let n_points = reader.read_u32::<LittleEndian>()? as usize;
                    let mut block = Vec::with_capacity(n_points);
                    for _ in 0..n_points {
                        block.push(read_point(&mut reader)?);
                    }
                    blocks.push(block);
                }
                let n_prefix = reader.read_u32::<LittleEndian>()? as usize;
                let mut prefix_sums = Vec::with_capacity(n_prefix);
                for _ in 0..n_prefix {
                    prefix_sums.push(reader.read_i32::<LittleEndian>()? as u64);
                }
                let n_centers = reader.read_u32::<LittleEndian>()? as usize;
                let mut centers = Vec::with_capacity(n_centers);
                for _ in 0..n_centers {
                    centers.push(read_point(&mut reader)?);
                }
                row.push(Cluster {
                    centers,
                    blocks,
                    prefix_sums,
                });
            }
            grid.push(row);
        }
        log::info!("hand clusters loaded");
        Ok(Self { grid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_cluster(hand_index: i32) -> Cluster {
        let point = ClusterPoint {
            features: [1.0; BET_NB],
            hand_index,
            opp_size: 0,
        };
        Cluster {
            centers: vec![point.clone()],
            blocks: vec![vec![point]],
            prefix_sums: vec![1],
        }
    }

    #[test]
    fn round_trip_preserves_a_small_grid() {
        let grid: Vec<Vec<Cluster>> = (0..OWN_SIZES)
            .map(|_| (0..OPP_SIZES).map(|_| Cluster::default()).collect())
            .collect();
        let mut hc = HandCluster { grid };
        hc.grid[0][0] = tiny_cluster(0);

        let dir = std::env::temp_dir();
        let path = dir.join(format!("hcl0_roundtrip_{}.bin", std::process::id()));
        hc.save(&path).unwrap();
        let loaded = HandCluster::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.grid[0][0].blocks.len(), 1);
        assert_eq!(loaded.grid[0][0].blocks[0][0].hand_index, 0);
        assert!(loaded.grid[1][0].blocks.is_empty());
    }

    #[test]
    fn bad_magic_is_rejected() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("hcl0_badmagic_{}.bin", std::process::id()));
        std::fs::write(&path, b"NOPEgarbage").unwrap();
        let result = HandCluster::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(Error::FormatError { .. })));
    }
}
