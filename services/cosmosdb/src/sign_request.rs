use crate::constants::{DATE_FORMAT, X_MS_DATE};
use crate::resource::ResourceCoordinate;
use crate::token::{authorization_token, signature, string_to_sign, SignedAuthorization};
use crate::Credential;
use async_trait::async_trait;
use chrono::FixedOffset;
use docsign_core::time::{format_with, now, DateTime};
use docsign_core::{Context, Error, Result, SignRequest};
use http::request::Parts;
use http::{header, HeaderValue, Uri};

/// RequestSigner that implements CosmosDB master key authorization.
///
/// Two call shapes share the same signing steps: [`sign_coordinate`] for
/// callers that already know the resource type and id, and [`sign_url`] for
/// callers that only hold an endpoint URL. The [`SignRequest`] implementation
/// signs live request parts in place for use behind a [`docsign_core::Signer`].
///
/// - [Access control in the Azure Cosmos DB SQL API](https://learn.microsoft.com/en-us/rest/api/cosmos-db/access-control-on-cosmosdb-resources)
///
/// [`sign_coordinate`]: RequestSigner::sign_coordinate
/// [`sign_url`]: RequestSigner::sign_url
#[derive(Clone, Debug)]
pub struct RequestSigner {
    header_name: header::HeaderName,
    date_format: String,
    time_offset: Option<FixedOffset>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new builder for CosmosDB signer.
    pub fn new() -> Self {
        Self {
            header_name: header::AUTHORIZATION,
            date_format: DATE_FORMAT.to_string(),
            time_offset: None,
            time: None,
        }
    }

    /// Emit the authorization token under a different header name.
    pub fn with_header_name(mut self, name: header::HeaderName) -> Self {
        self.header_name = name;
        self
    }

    /// Override the strftime format used to render the date header.
    ///
    /// # Note
    ///
    /// The gateway reconstructs the string to sign from the date header and
    /// only accepts the default GMT rendering. Changing the format risks every
    /// request being rejected with an authorization failure.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Render the date in the given fixed offset instead of UTC.
    ///
    /// Carries the same risk as [`with_date_format`](RequestSigner::with_date_format).
    pub fn with_time_offset(mut self, offset: FixedOffset) -> Self {
        self.time_offset = Some(offset);
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign an explicitly supplied resource coordinate.
    ///
    /// The returned authorization token and date come from a single timestamp,
    /// so the caller can attach both headers without them ever diverging.
    pub fn sign_coordinate(
        &self,
        verb: &str,
        coordinate: &ResourceCoordinate,
        credential: &Credential,
    ) -> Result<SignedAuthorization> {
        if verb.trim().is_empty() {
            return Err(Error::config_invalid("http verb is required"));
        }
        if coordinate.resource_type.trim().is_empty() {
            return Err(Error::config_invalid("resource type is required"));
        }

        self.sign(verb, coordinate, credential)
    }

    /// Derive the resource coordinate from an endpoint URL, then sign.
    ///
    /// Callers never have to decompose REST paths themselves. The derived
    /// coordinate may be empty for account root URLs; the gateway treats that
    /// as addressing the account itself.
    pub fn sign_url(
        &self,
        verb: &str,
        url: &str,
        credential: &Credential,
    ) -> Result<SignedAuthorization> {
        if verb.trim().is_empty() {
            return Err(Error::config_invalid("http verb is required"));
        }
        if url.trim().is_empty() {
            return Err(Error::config_invalid("endpoint url is required"));
        }

        let uri: Uri = url.parse()?;
        self.sign(verb, &ResourceCoordinate::from_uri(&uri), credential)
    }

    fn sign(
        &self,
        verb: &str,
        coordinate: &ResourceCoordinate,
        credential: &Credential,
    ) -> Result<SignedAuthorization> {
        if credential.master_key.trim().is_empty() {
            return Err(Error::config_invalid("master key is required"));
        }

        // One timestamp per call: the signed string and the date header must
        // carry the identical value.
        let date = format_with(
            self.time.unwrap_or_else(now),
            &self.date_format,
            self.time_offset,
        );

        let string_to_sign = string_to_sign(
            verb,
            &coordinate.resource_type,
            &coordinate.resource_id,
            &date,
        );
        let signature = signature(&credential.master_key, &string_to_sign)?;

        Ok(SignedAuthorization {
            authorization: authorization_token(&signature),
            date,
        })
    }
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::request_invalid("credential is required"));
        };

        // Live requests sign whatever coordinate their URL resolves to,
        // including the empty one for account root requests.
        let coordinate = ResourceCoordinate::from_uri(&req.uri);
        let signed = self.sign(req.method.as_str(), &coordinate, cred)?;

        req.headers.insert(
            X_MS_DATE,
            signed
                .date
                .parse()
                .map_err(|e| Error::unexpected("failed to parse date header").with_source(e))?,
        );
        req.headers.insert(self.header_name.clone(), {
            let mut value: HeaderValue = signed.authorization.parse().map_err(|e| {
                Error::signing_failed("failed to build authorization header").with_source(e)
            })?;
            value.set_sensitive(true);
            value
        });

        Ok(())
    }
}
