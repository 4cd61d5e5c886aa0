//! Argon2id tuning parameters and presets

use serde::{Deserialize, Serialize};

use crate::error::{PassHashError, Result};

/// Smallest salt accepted by Argon2 (bytes)
pub const MIN_SALT_LEN: u32 = 8;

/// Smallest tag accepted by Argon2 (bytes)
pub const MIN_KEY_LEN: u32 = 4;

/// Input parameters for one Argon2id derivation.
///
/// A hash string only records memory, iterations and parallelism; salt and
/// key lengths of a decoded hash are taken from the decoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashParams {
    /// Memory in KiB
    pub memory_cost_kib: u32,
    /// Passes over memory (time cost)
    pub iterations: u32,
    /// Lanes
    pub parallelism: u8,
    /// Random salt length in bytes
    pub salt_length: u32,
    /// Derived key length in bytes
    pub key_length: u32,
}

impl HashParams {
    /// Serverless profile: about a second per hash on a base instance, needs 64 MiB.
    pub const LAMBDA: HashParams = HashParams {
        memory_cost_kib: 64 * 1024,
        iterations: 15,
        parallelism: 4,
        salt_length: 64,
        key_length: 512,
    };

    /// Interactive login profile (16-byte salt, 32-byte key)
    pub const INTERACTIVE: HashParams = HashParams {
        memory_cost_kib: 64 * 1024,
        iterations: 1,
        parallelism: 2,
        salt_length: 16,
        key_length: 32,
    };

    /// For weak devices
    pub const LOW_MEMORY: HashParams = HashParams {
        memory_cost_kib: 16 * 1024,
        iterations: 4,
        parallelism: 1,
        salt_length: 16,
        key_length: 32,
    };

    pub const fn new(
        memory_cost_kib: u32,
        iterations: u32,
        parallelism: u8,
        salt_length: u32,
        key_length: u32,
    ) -> Self {
        Self {
            memory_cost_kib,
            iterations,
            parallelism,
            salt_length,
            key_length,
        }
    }

    /// Checks the bounds Argon2 itself imposes.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(PassHashError::InvalidParameters("iterations must be positive".into()));
        }
        if self.parallelism == 0 {
            return Err(PassHashError::InvalidParameters("parallelism must be positive".into()));
        }
        if self.memory_cost_kib < 8 * u32::from(self.parallelism) {
            return Err(PassHashError::InvalidParameters(format!(
                "memory_cost_kib must be at least 8 * parallelism ({} KiB), got {}",
                8 * u32::from(self.parallelism),
                self.memory_cost_kib
            )));
        }
        if self.salt_length < MIN_SALT_LEN {
            return Err(PassHashError::InvalidParameters(format!(
                "salt_length must be at least {} bytes, got {}",
                MIN_SALT_LEN, self.salt_length
            )));
        }
        if self.key_length < MIN_KEY_LEN {
            return Err(PassHashError::InvalidParameters(format!(
                "key_length must be at least {} bytes, got {}",
                MIN_KEY_LEN, self.key_length
            )));
        }
        Ok(())
    }

    /// Picks memory and lanes for a host with `cpu_count` CPUs and
    /// `available_memory_mib` free memory. Salt and key lengths are kept.
    pub fn auto_tune(&self, cpu_count: usize, available_memory_mib: u64) -> Self {
        // Lanes = half the CPUs, 1..=8
        let parallelism = (cpu_count / 2).clamp(1, 8) as u8;

        // Memory = quarter of what is free, 16..=512 MiB
        let memory_mib = (available_memory_mib / 4).clamp(16, 512) as u32;

        let iterations = if memory_mib >= 128 { 2 } else { 3 };

        Self {
            memory_cost_kib: memory_mib * 1024,
            iterations,
            parallelism,
            ..*self
        }
    }

    /// Tunes `self` for the machine this process runs on.
    #[cfg(feature = "auto-tune")]
    pub fn tuned_for_host(&self) -> Self {
        let sys = sysinfo::System::new_all();
        let cpu_count = sys.cpus().len().max(1);
        let available_mib = sys.available_memory() / (1024 * 1024);

        let tuned = self.auto_tune(cpu_count, available_mib);
        tracing::debug!(
            cpu_count,
            available_mib,
            memory_cost_kib = tuned.memory_cost_kib,
            iterations = tuned.iterations,
            parallelism = tuned.parallelism,
            "auto-tuned Argon2id parameters"
        );
        tuned
    }

    /// Rough wall-clock estimate for one derivation (ms)
    pub fn estimated_time_ms(&self) -> u64 {
        let base = 50u64;
        let mem_factor = (self.memory_cost_kib as u64 / 1024).max(1);
        let time_factor = self.iterations as u64;
        base * time_factor * mem_factor / u64::from(self.parallelism.max(1))
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::LAMBDA
    }
}
