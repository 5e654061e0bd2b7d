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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in CosmosDB requests.
pub const X_MS_DATE: &str = "x-ms-date";

// Env values used by CosmosDB credential providers.
pub const COSMOSDB_ENDPOINT: &str = "COSMOSDB_ENDPOINT";
pub const COSMOSDB_MASTER_KEY: &str = "COSMOSDB_MASTER_KEY";
pub const COSMOSDB_CONNECTION_STRING: &str = "COSMOSDB_CONNECTION_STRING";
pub const AZURE_COSMOS_ENDPOINT: &str = "AZURE_COSMOS_ENDPOINT";
pub const AZURE_COSMOS_MASTER_KEY: &str = "AZURE_COSMOS_MASTER_KEY";
pub const AZURE_COSMOS_CONNECTION_STRING: &str = "AZURE_COSMOS_CONNECTION_STRING";

// Fixed fields of the authorization token.
pub const AUTH_TOKEN_TYPE_MASTER: &str = "master";
pub const AUTH_TOKEN_VERSION: &str = "1.0";

/// Default strftime format for the `x-ms-date` header: `Thu, 27 Apr 2017 00:51:12 GMT`.
///
/// The verifier reconstructs the string to sign from this header, so the day of
/// month keeps its leading zero and the timezone is always rendered as `GMT`.
pub const DATE_FORMAT: &str = "%a, %d %b %Y %T GMT";

/// AsciiSet matching the encoding the CosmosDB gateway expects for the whole
/// authorization token.
///
/// Every byte is percent encoded except 'A'-'Z', 'a'-'z', '0'-'9', '-', '.',
/// '_' and '*'.
pub static AUTH_TOKEN_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

/// The resource type vocabulary understood by the CosmosDB REST API.
///
/// These are the path segment names that can appear as the resource type of a
/// signed request. The list exists for validation and tooling; signing itself
/// accepts any string since the gateway evolves faster than this crate.
pub const RESOURCE_TYPES: &[&str] = &[
    "attachments",
    "colls",
    "conflicts",
    "dbs",
    "docs",
    "media",
    "offers",
    "permissions",
    "pkranges",
    "sprocs",
    "triggers",
    "udfs",
    "users",
];

// CosmosDB emulator defaults. The key is a fixed, publicly documented value.
pub const COSMOSDB_EMULATOR_ENDPOINT: &str = "https://localhost:8081";
pub const COSMOSDB_EMULATOR_MASTER_KEY: &str =
    "C2y6yDjf5/R+ob0N8A7Cgv30VRDJIWEHLM+4QDU5DE2nQ9nDuVTqobD4b8mGGyPMbIZnqyMsEcaGQy67XIw/Jw==";
