// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use docsign_core::utils::Redact;
use docsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential for CosmosDB master key authorization.
///
/// The key is the base64 secret distributed out of band by the service. It is
/// kept in its encoded form and only decoded at the moment of signing.
#[derive(Clone)]
pub struct Credential {
    /// Base64 encoded account master key.
    pub master_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("master_key", &Redact::from(&self.master_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.master_key.is_empty()
    }
}

impl Credential {
    /// Create a new credential from a base64 encoded master key.
    pub fn with_master_key(master_key: &str) -> Self {
        Self {
            master_key: master_key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COSMOSDB_EMULATOR_MASTER_KEY;

    #[test]
    fn test_is_valid() {
        assert!(Credential::with_master_key(COSMOSDB_EMULATOR_MASTER_KEY).is_valid());
        assert!(!Credential::with_master_key("").is_valid());
    }

    #[test]
    fn test_debug_redacts_master_key() {
        let cred = Credential::with_master_key(COSMOSDB_EMULATOR_MASTER_KEY);
        let out = format!("{cred:?}");
        assert!(!out.contains(COSMOSDB_EMULATOR_MASTER_KEY));
        assert!(out.contains("C2y***"));
    }
}
