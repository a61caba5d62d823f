use std::fmt::Display;

use types::{Department, UserDetails};

use crate::{Notice, Rejection, form::is_blank};

/// A record that can be looked up by identifier.
pub trait Resource: Clone {
    /// How the record is named in notices, e.g. "Department".
    const NAME: &'static str;
}

impl Resource for Department {
    const NAME: &'static str = "Department";
}

impl Resource for UserDetails {
    const NAME: &'static str = "User";
}

/// A successful lookup, with the identifier that was searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<R> {
    pub id: String,
    pub record: R,
}

/// State of a "Find ..." view: the identifier input and the last result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<R> {
    id: String,
    result: Option<Found<R>>,
    in_flight: Option<Pending>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    id: String,
    /// Set when the view is cleared while the request runs.
    discarded: bool,
}

impl<R> Default for Lookup<R> {
    fn default() -> Self {
        Self {
            id: String::new(),
            result: None,
            in_flight: None,
        }
    }
}

impl<R: Resource> Lookup<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn result(&self) -> Option<&Found<R>> {
        self.result.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a search, returning the trimmed identifier to fetch.
    pub fn begin_search(&mut self) -> Result<String, Rejection> {
        if self.in_flight.is_some() {
            return Err(Rejection::Busy);
        }
        if is_blank(&self.id) {
            return Err(Rejection::Invalid(Notice::warning(format!(
                "Please enter a {} ID!",
                R::NAME
            ))));
        }

        let id = self.id.trim().to_string();
        self.in_flight = Some(Pending {
            id: id.clone(),
            discarded: false,
        });
        Ok(id)
    }

    /// Not-found and transport failures are reported the same way.
    ///
    /// Returns `None` when the view was cleared while the request ran; the
    /// outcome is then dropped and only the busy flag is released.
    pub fn finish_search<E: Display>(&mut self, outcome: Result<R, E>) -> Option<Notice> {
        let Pending { id, discarded } = self.in_flight.take().unwrap_or(Pending {
            id: String::new(),
            discarded: false,
        });
        if discarded {
            tracing::debug!(%id, resource = R::NAME, "dropping result of cleared lookup");
            return None;
        }

        let notice = match outcome {
            Ok(record) => {
                self.result = Some(Found { id, record });
                Notice::success(format!("{} found successfully!", R::NAME))
            }
            Err(error) => {
                tracing::warn!(%error, %id, resource = R::NAME, "lookup failed");
                self.result = None;
                Notice::error(format!("{} not found or error occurred!", R::NAME))
            }
        };
        Some(notice)
    }

    /// Reset the input and result. A search still in flight keeps the view
    /// busy, but its outcome is discarded.
    pub fn clear(&mut self) -> Notice {
        self.id.clear();
        self.result = None;
        if let Some(pending) = &mut self.in_flight {
            pending.discarded = true;
        }
        Notice::info("Cleared search results")
    }

    pub fn empty_prompt(&self) -> String {
        format!("Enter a {} ID and click search to view details", R::NAME)
    }

    pub fn input_placeholder(&self) -> String {
        format!("Enter {} ID (e.g., 1, 2, 3...)", R::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use types::User;

    fn it_department() -> Department {
        Department {
            department_name: Some("IT".into()),
            department_code: Some("IT-01".into()),
            department_address: Some("123 Rd".into()),
            ..Default::default()
        }
    }

    #[test]
    fn blank_id_is_rejected_without_a_request() {
        for id in ["", "   ", "\n"] {
            let mut lookup = Lookup::<Department>::new();
            lookup.set_id(id);

            assert_eq!(
                lookup.begin_search(),
                Err(Rejection::Invalid(Notice::warning("Please enter a Department ID!")))
            );
            assert!(!lookup.is_searching());
        }

        let mut lookup = Lookup::<UserDetails>::new();
        let Err(Rejection::Invalid(notice)) = lookup.begin_search() else {
            panic!("blank id should be rejected");
        };
        assert_eq!(notice.message, "Please enter a User ID!");
    }

    #[test]
    fn search_sends_trimmed_id() {
        let mut lookup = Lookup::<Department>::new();
        lookup.set_id(" 1 ");

        assert_eq!(lookup.begin_search(), Ok("1".to_string()));
        assert!(lookup.is_searching());
        assert_eq!(lookup.begin_search(), Err(Rejection::Busy));
    }

    #[test]
    fn identifier_is_free_text() {
        let mut lookup = Lookup::<Department>::new();
        lookup.set_id("ENG-001");

        assert_eq!(lookup.begin_search(), Ok("ENG-001".to_string()));
    }

    #[test]
    fn success_stores_record() {
        let mut lookup = Lookup::<Department>::new();
        lookup.set_id("1");
        lookup.begin_search().unwrap();

        let notice = lookup.finish_search::<&str>(Ok(it_department()));

        assert_eq!(notice, Some(Notice::success("Department found successfully!")));
        let found = lookup.result().unwrap();
        assert_eq!(found.id, "1");
        assert_eq!(found.record, it_department());
        assert!(!lookup.is_searching());
    }

    #[test]
    fn failure_clears_previous_result() {
        let mut lookup = Lookup::<Department>::new();
        lookup.set_id("1");
        lookup.begin_search().unwrap();
        lookup.finish_search::<&str>(Ok(it_department()));

        lookup.set_id("999");
        lookup.begin_search().unwrap();
        let notice = lookup
            .finish_search(Err("backend responded with 404"))
            .unwrap();

        assert_eq!(notice.level, Level::Error);
        assert_eq!(notice.message, "Department not found or error occurred!");
        assert!(lookup.result().is_none());
        assert!(!lookup.is_searching());
        assert_eq!(lookup.id(), "999");
    }

    #[test]
    fn user_lookup_messages() {
        let mut lookup = Lookup::<UserDetails>::new();
        lookup.set_id("2");
        lookup.begin_search().unwrap();
        let notice = lookup
            .finish_search::<&str>(Ok(UserDetails {
                user: Some(User::default()),
                department: None,
            }))
            .unwrap();
        assert_eq!(notice.message, "User found successfully!");

        lookup.begin_search().unwrap();
        let notice = lookup.finish_search(Err("timeout")).unwrap();
        assert_eq!(notice.message, "User not found or error occurred!");
    }

    #[test]
    fn clear_resets_everything() {
        let mut lookup = Lookup::<Department>::new();
        lookup.set_id("1");
        lookup.begin_search().unwrap();
        lookup.finish_search::<&str>(Ok(it_department()));

        let notice = lookup.clear();

        assert_eq!(notice, Notice::info("Cleared search results"));
        assert_eq!(lookup, Lookup::new());

        // Clearing an already empty view is harmless.
        assert_eq!(lookup.clear(), Notice::info("Cleared search results"));
        assert_eq!(lookup, Lookup::new());
    }

    #[test]
    fn clear_during_search_discards_the_late_result() {
        let mut lookup = Lookup::<Department>::new();
        lookup.set_id("1");
        lookup.begin_search().unwrap();

        lookup.clear();
        assert!(lookup.is_searching());
        assert_eq!(lookup.begin_search(), Err(Rejection::Busy));

        assert_eq!(lookup.finish_search::<&str>(Ok(it_department())), None);
        assert!(lookup.result().is_none());
        assert_eq!(lookup.id(), "");
        assert!(!lookup.is_searching());

        lookup.set_id("1");
        lookup.begin_search().unwrap();
        assert!(lookup.finish_search::<&str>(Ok(it_department())).is_some());
        assert_eq!(lookup.result().unwrap().id, "1");
    }
}
