//! Holster - layered environment resolution and wallet lifecycle management.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── ensure        # Reuse/repair/provision the wallet
//! │   ├── rotate        # Destructive rotation, gated behind confirmation
//! │   ├── status        # Resolved environment + wallet overview
//! │   ├── balance       # Fail-soft balance lookup
//! │   ├── export        # Demo keystore export
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── env           # Layered resolution + permissive/strict validation
//!     ├── store         # Credential file (KEY=value, 0600 post-condition)
//!     ├── wallet        # Lifecycle state machine
//!     ├── keys          # Keypair generation / address derivation
//!     ├── balance       # JSON-RPC eth_getBalance collaborator
//!     └── keystore      # Plaintext demo keystore export
//! ```
//!
//! # Guarantees
//!
//! - Ambient env > `.env.local` > `.env`, whole-value shadowing per key
//! - `ensure` never discards an existing usable private key
//! - The credential file mode is owner-only after every write
//! - Validation completes before any write; failures leave files untouched

pub mod cli;
pub mod core;
pub mod error;
