//! Trust root for TLS connections to MongoDB.
//!
//! Every connection attempt is verified against a CA bundle. The bundle is
//! located and validated once, when the provider is built, so a broken bundle
//! fails at startup rather than on the first query. Hosts without a bundle
//! file fall back to the driver's built-in roots.

use crate::{Error, Result};
use rustls::RootCertStore;
use rustls_pemfile::Item;
use std::fs;
use std::path::{Path, PathBuf};

/// Validated certificate-authority bundle.
///
/// Holds the bundle path handed to the client library and the number of
/// certificates found. Without a path the client library keeps its own roots.
///
/// # Examples
///
/// ```no_run
/// use mongo_bootstrap::TrustRoot;
///
/// // Explicit bundle
/// let root = TrustRoot::from_path("/etc/ssl/certs/ca-certificates.crt")?;
///
/// // System bundle (honours SSL_CERT_FILE)
/// let root = TrustRoot::resolve(None)?;
/// # Ok::<(), mongo_bootstrap::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustRoot {
    path: Option<PathBuf>,
    cert_count: usize,
}

impl TrustRoot {
    /// Load and validate a PEM bundle.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if:
    /// - the file cannot be read
    /// - the file is not valid PEM
    /// - no usable certificate is found
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cert_count = load_bundle(path)?;

        tracing::debug!(path = %path.display(), certs = cert_count, "trust root loaded");

        Ok(Self {
            path: Some(path.to_path_buf()),
            cert_count,
        })
    }

    /// Trust root without a bundle file; the client library uses its own roots
    pub fn driver_defaults() -> Self {
        Self {
            path: None,
            cert_count: 0,
        }
    }

    /// Resolve the trust root.
    ///
    /// Uses `explicit` when given. Otherwise the system bundle file is located
    /// the way OpenSSL does (`SSL_CERT_FILE` first, then the usual distro
    /// locations). When there is no bundle file, native certificates are only
    /// counted for the log and the driver's roots apply.
    ///
    /// # Errors
    ///
    /// `Error::Config` when an explicit or discovered bundle cannot be loaded.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        if let Some(path) = openssl_probe::probe().cert_file {
            return Self::from_path(path);
        }

        let native = rustls_native_certs::load_native_certs();
        tracing::debug!(
            native_certs = native.certs.len(),
            errors = native.errors.len(),
            "no CA bundle file found, using driver roots"
        );
        Ok(Self {
            path: None,
            cert_count: native.certs.len(),
        })
    }

    /// Path of the bundle, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of certificates accepted from the bundle
    pub fn cert_count(&self) -> usize {
        self.cert_count
    }
}

/// Parse a PEM bundle, returning the number of usable certificates.
fn load_bundle(path: &Path) -> Result<usize> {
    let data = fs::read(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read CA bundle '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut reader = std::io::Cursor::new(&data);
    let mut root_store = RootCertStore::empty();
    let mut found_certs = 0;

    loop {
        match rustls_pemfile::read_one(&mut reader) {
            Ok(Some(Item::X509Certificate(cert))) => {
                let (added, _) = root_store.add_parsable_certificates(std::iter::once(cert));
                found_certs += added;
            }
            Ok(Some(_)) => {
                // Keys and CRLs are not trust anchors
            }
            Ok(None) => break,
            Err(_) => {
                return Err(Error::Config(format!(
                    "Failed to parse CA bundle '{}'",
                    path.display()
                )));
            }
        }
    }

    if found_certs == 0 {
        return Err(Error::Config(format!(
            "No valid certificates found in '{}'",
            path.display()
        )));
    }

    Ok(found_certs)
}
