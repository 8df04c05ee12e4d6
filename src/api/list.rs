use crate::models::enums::{ListStatus, ListsSortBy, SortDirection};
use crate::models::list::{List, ListCount};
use crate::{CakeMailClient, CakeMailResult, Parameters};

/// Provides methods for managing mailing lists.
#[derive(Debug)]
pub struct ListHandler {
    client: CakeMailClient,
}

impl ListHandler {
    /// Creates a new list API instance.
    ///
    /// This method is intended for internal use by the CakeMail client.
    pub(crate) fn new(client: CakeMailClient) -> Self {
        Self { client }
    }

    /// Retrieves a list.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use cakemail_client::CakeMailClient;
    /// #
    /// # async fn example(client: &CakeMailClient) -> Result<(), cakemail_client::CakeMailError> {
    /// let list = client
    ///     .lists()
    ///     .get("user-key", 123)
    ///     .calculate_engagement(true)
    ///     .send()
    ///     .await?;
    ///
    /// println!("{} has {:?} active members", list.name, list.active_count);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, user_key: impl Into<String>, list_id: i64) -> GetListBuilder {
        GetListBuilder::new(self.client.clone(), user_key.into(), list_id)
    }

    /// Retrieves the lists matching the filter criteria.
    pub fn list(&self, user_key: impl Into<String>) -> ListListsBuilder {
        ListListsBuilder::new(self.client.clone(), user_key.into())
    }

    /// Counts the lists matching the filter criteria.
    pub fn count(&self, user_key: impl Into<String>) -> CountListsBuilder {
        CountListsBuilder::new(self.client.clone(), user_key.into())
    }

    /// Deletes a list. Use with caution as this operation cannot be undone.
    pub fn delete(&self, user_key: impl Into<String>, list_id: i64) -> DeleteListBuilder {
        DeleteListBuilder::new(self.client.clone(), user_key.into(), list_id)
    }
}

#[derive(Debug, Clone)]
pub struct GetListBuilder {
    client: CakeMailClient,
    user_key: String,
    list_id: i64,
    include_details: bool,
    calculate_engagement: bool,
    client_id: Option<i64>,
}

impl GetListBuilder {
    pub(crate) fn new(client: CakeMailClient, user_key: String, list_id: i64) -> Self {
        Self {
            client,
            user_key,
            list_id,
            include_details: true,
            calculate_engagement: false,
            client_id: None,
        }
    }

    /// Whether member counters are returned. Defaults to `true`.
    pub fn include_details(mut self, include_details: bool) -> Self {
        self.include_details = include_details;
        self
    }

    /// Whether the engagement score is calculated. Defaults to `false`.
    pub fn calculate_engagement(mut self, calculate_engagement: bool) -> Self {
        self.calculate_engagement = calculate_engagement;
        self
    }

    pub fn client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub async fn send(self) -> CakeMailResult<List> {
        let mut params = Parameters::new();
        params
            .push("user_key", &self.user_key)
            .push("list_id", self.list_id)
            .push("no_details", !self.include_details)
            .push("with_engagement", self.calculate_engagement)
            .push_opt("client_id", self.client_id);

        self.client.request("List/GetInfo", &params, None).await
    }
}

#[derive(Debug, Clone, Default)]
struct ListFilter {
    status: Option<ListStatus>,
    name: Option<String>,
    client_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ListListsBuilder {
    client: CakeMailClient,
    user_key: String,
    filter: ListFilter,
    sort_by: Option<ListsSortBy>,
    direction: Option<SortDirection>,
    limit: u32,
    offset: u32,
}

impl ListListsBuilder {
    pub(crate) fn new(client: CakeMailClient, user_key: String) -> Self {
        Self {
            client,
            user_key,
            filter: ListFilter::default(),
            sort_by: None,
            direction: None,
            limit: 0,
            offset: 0,
        }
    }

    pub fn status(mut self, status: ListStatus) -> Self {
        self.filter.status = Some(status);
        self
    }

    /// Only lists whose name contains this value.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.filter.name = Some(name.into());
        self
    }

    pub fn sort_by(mut self, sort_by: ListsSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Limits the number of lists. Zero means no limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn client_id(mut self, client_id: i64) -> Self {
        self.filter.client_id = Some(client_id);
        self
    }

    pub async fn send(self) -> CakeMailResult<Vec<List>> {
        let mut params = Parameters::new();
        params
            .push("user_key", &self.user_key)
            .push_opt("status", self.filter.status)
            .push_opt("name", self.filter.name.as_ref())
            .push_opt("sort_by", self.sort_by)
            .push_opt("direction", self.direction)
            .push_if("limit", self.limit, self.limit > 0)
            .push_if("offset", self.offset, self.offset > 0)
            .push_opt("client_id", self.filter.client_id);

        self.client.request("List/GetList", &params, Some("lists")).await
    }
}

#[derive(Debug, Clone)]
pub struct CountListsBuilder {
    client: CakeMailClient,
    user_key: String,
    filter: ListFilter,
}

impl CountListsBuilder {
    pub(crate) fn new(client: CakeMailClient, user_key: String) -> Self {
        Self {
            client,
            user_key,
            filter: ListFilter::default(),
        }
    }

    pub fn status(mut self, status: ListStatus) -> Self {
        self.filter.status = Some(status);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.filter.name = Some(name.into());
        self
    }

    pub fn client_id(mut self, client_id: i64) -> Self {
        self.filter.client_id = Some(client_id);
        self
    }

    pub async fn send(self) -> CakeMailResult<i64> {
        let mut params = Parameters::new();
        params
            .push("user_key", &self.user_key)
            .push("count", true)
            .push_opt("status", self.filter.status)
            .push_opt("name", self.filter.name.as_ref())
            .push_opt("client_id", self.filter.client_id);

        let count: ListCount = self.client.request("List/GetList", &params, None).await?;
        Ok(count.count)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteListBuilder {
    client: CakeMailClient,
    user_key: String,
    list_id: i64,
    client_id: Option<i64>,
}

impl DeleteListBuilder {
    pub(crate) fn new(client: CakeMailClient, user_key: String, list_id: i64) -> Self {
        Self {
            client,
            user_key,
            list_id,
            client_id: None,
        }
    }

    pub fn client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Returns `true` once the list is deleted.
    pub async fn send(self) -> CakeMailResult<bool> {
        let mut params = Parameters::new();
        params
            .push("user_key", &self.user_key)
            .push("list_id", self.list_id)
            .push_opt("client_id", self.client_id);

        self.client.request("List/Delete", &params, None).await
    }
}
