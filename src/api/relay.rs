use std::marker::PhantomData;

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;

use crate::models::enums::MessageEncoding;
use crate::models::relay::{RelayBounceLog, RelayClickLog, RelayLog, RelayLogKind, RelayOpenLog};
use crate::{CakeMailClient, CakeMailResult, Parameters};

/// Provides methods for sending one-off emails and reading their logs.
#[derive(Debug)]
pub struct RelayHandler {
    client: CakeMailClient,
}

impl RelayHandler {
    /// Creates a new relay API instance.
    ///
    /// This method is intended for internal use by the CakeMail client.
    pub(crate) fn new(client: CakeMailClient) -> Self {
        Self { client }
    }

    /// Sends a one-off email.
    ///
    /// Opens and clicks are not tracked unless a tracking id is set on the
    /// returned builder.
    ///
    /// # Arguments
    ///
    /// * `user_key` - User Key of the user who initiates the call.
    /// * `recipient_email` - The email address of the recipient.
    /// * `sender_email` - Email address of the sender.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use cakemail_client::{CakeMailClient, MessageEncoding};
    /// #
    /// # async fn example(client: &CakeMailClient) -> Result<(), cakemail_client::CakeMailError> {
    /// let sent = client
    ///     .relays()
    ///     .send("user-key", "jane@example.com", "news@example.com")
    ///     .subject("Welcome")
    ///     .html("<p>Hello Jane</p>")
    ///     .text("Hello Jane")
    ///     .encoding(MessageEncoding::Utf8)
    ///     .tracking_id(42) // track opens and clicks
    ///     .send()
    ///     .await?;
    /// assert!(sent);
    /// # Ok(())
    /// # }
    /// ```
    pub fn send(
        &self,
        user_key: impl Into<String>,
        recipient_email: impl Into<String>,
        sender_email: impl Into<String>,
    ) -> SendRelayBuilder {
        SendRelayBuilder::new(
            self.client.clone(),
            user_key.into(),
            recipient_email.into(),
            sender_email.into(),
        )
    }

    /// Retrieves the sent log items for a tracked relay or for a client.
    pub fn sent_logs(&self, user_key: impl Into<String>) -> RelayLogsBuilder<RelayLog> {
        RelayLogsBuilder::new(self.client.clone(), user_key.into())
    }

    /// Retrieves the open log items for a tracked relay or for a client.
    pub fn open_logs(&self, user_key: impl Into<String>) -> RelayLogsBuilder<RelayOpenLog> {
        RelayLogsBuilder::new(self.client.clone(), user_key.into())
    }

    /// Retrieves the click log items for a tracked relay or for a client.
    pub fn click_logs(&self, user_key: impl Into<String>) -> RelayLogsBuilder<RelayClickLog> {
        RelayLogsBuilder::new(self.client.clone(), user_key.into())
    }

    /// Retrieves the bounce log items for a tracked relay or for a client.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use cakemail_client::CakeMailClient;
    /// #
    /// # async fn example(client: &CakeMailClient) -> Result<(), cakemail_client::CakeMailError> {
    /// let bounces = client.relays().bounce_logs("user-key").limit(50).send().await?;
    /// for bounce in bounces {
    ///     println!("{}: {:?}", bounce.log.email, bounce.message);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn bounce_logs(&self, user_key: impl Into<String>) -> RelayLogsBuilder<RelayBounceLog> {
        RelayLogsBuilder::new(self.client.clone(), user_key.into())
    }
}

#[derive(Debug, Clone)]
pub struct SendRelayBuilder {
    client: CakeMailClient,
    user_key: String,
    recipient_email: String,
    sender_email: String,
    subject: String,
    html: String,
    text: String,
    sender_name: Option<String>,
    encoding: Option<MessageEncoding>,
    client_id: Option<i64>,
    tracking_id: Option<i64>,
}

impl SendRelayBuilder {
    pub(crate) fn new(
        client: CakeMailClient,
        user_key: String,
        recipient_email: String,
        sender_email: String,
    ) -> Self {
        Self {
            client,
            user_key,
            recipient_email,
            sender_email,
            subject: String::new(),
            html: String::new(),
            text: String::new(),
            sender_name: None,
            encoding: None,
            client_id: None,
            tracking_id: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// HTML content of the message.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    /// Text content of the message.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn sender_name(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = Some(sender_name.into());
        self
    }

    pub fn encoding(mut self, encoding: MessageEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Client ID of the client in which the relay is located.
    pub fn client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Enables open and click tracking under the given id.
    pub fn tracking_id(mut self, tracking_id: i64) -> Self {
        self.tracking_id = Some(tracking_id);
        self
    }

    pub(crate) fn parameters(&self) -> Parameters {
        let tracked = self.tracking_id.is_some();

        let mut params = Parameters::new();
        params
            .push("user_key", &self.user_key)
            .push_opt("tracking_id", self.tracking_id)
            .push("email", &self.recipient_email)
            .push("subject", &self.subject)
            .push("html_message", &self.html)
            .push("text_message", &self.text)
            .push("sender_email", &self.sender_email)
            .push("track_opening", tracked)
            .push("track_clicks_in_html", tracked)
            .push("track_clicks_in_text", tracked)
            .push_opt("sender_name", self.sender_name.as_ref())
            .push_opt("encoding", self.encoding)
            .push_opt("client_id", self.client_id);
        params
    }

    /// Sends the message. Returns `true` once CakeMail accepted it.
    pub async fn send(self) -> CakeMailResult<bool> {
        let params = self.parameters();
        self.client.request("Relay/Send", &params, None).await
    }
}

#[derive(Debug, Clone)]
pub struct RelayLogsBuilder<T> {
    client: CakeMailClient,
    user_key: String,
    tracking_id: Option<i64>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    limit: u32,
    offset: u32,
    client_id: Option<i64>,
    kind: PhantomData<T>,
}

impl<T> RelayLogsBuilder<T>
where
    T: RelayLogKind + DeserializeOwned,
{
    pub(crate) fn new(client: CakeMailClient, user_key: String) -> Self {
        Self {
            client,
            user_key,
            tracking_id: None,
            start: None,
            end: None,
            limit: 0,
            offset: 0,
            client_id: None,
            kind: PhantomData,
        }
    }

    /// Restricts the logs to one tracked relay. All log items of the client
    /// are returned otherwise.
    pub fn tracking_id(mut self, tracking_id: i64) -> Self {
        self.tracking_id = Some(tracking_id);
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Limits the number of log items. Zero means no limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub(crate) fn parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .push("user_key", &self.user_key)
            .push("log_type", T::LOG_TYPE)
            .push_opt("tracking_id", self.tracking_id)
            .push_opt("start_time", self.start)
            .push_opt("end_time", self.end)
            .push_if("limit", self.limit, self.limit > 0)
            .push_if("offset", self.offset, self.offset > 0)
            .push_opt("client_id", self.client_id);
        params
    }

    pub async fn send(self) -> CakeMailResult<Vec<T>> {
        let params = self.parameters();
        self.client
            .request("Relay/GetLogs", &params, Some(T::ARRAY_PROPERTY))
            .await
    }
}
