use crate::account::models::Username;

/// A single user's review of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub username: Username,
    pub text: String,
}

impl Review {
    pub fn new(username: Username, text: String) -> Self {
        Self { username, text }
    }
}

/// Ordered reviews of one book, holding at most one review per username.
///
/// The only ways to change the list are [`Reviews::upsert`],
/// [`Reviews::remove`] and [`Reviews::apply`], all of which keep the
/// one-review-per-user invariant and the relative order of untouched
/// reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reviews(Vec<Review>);

impl Reviews {
    fn position(&self, username: &Username) -> Option<usize> {
        self.0.iter().position(|review| &review.username == username)
    }

    /// Append `review`, or replace the text of the author's existing review
    /// in place.
    pub fn upsert(&mut self, review: Review) -> ReviewOutcome {
        match self.position(&review.username) {
            Some(index) => {
                self.0[index].text = review.text;
                ReviewOutcome::Updated
            }
            None => {
                self.0.push(review);
                ReviewOutcome::Created
            }
        }
    }

    /// Remove the review written by `username`, if any.
    pub fn remove(&mut self, username: &Username) -> ReviewOutcome {
        match self.position(username) {
            Some(index) => ReviewOutcome::Deleted(self.0.remove(index)),
            None => ReviewOutcome::Missing,
        }
    }

    pub fn apply(&mut self, mutation: ReviewMutation) -> ReviewOutcome {
        match mutation {
            ReviewMutation::Upsert(review) => self.upsert(review),
            ReviewMutation::Delete(username) => self.remove(&username),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Review> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Review> {
        self.0
    }
}

/// A change to one user's review of one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewMutation {
    Upsert(Review),
    Delete(Username),
}

/// Result of applying a [`ReviewMutation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Created,
    Updated,
    Deleted(Review),
    /// Delete requested but the user had no review.
    Missing,
}
