use std::collections::{HashMap, VecDeque};

use uuid::Uuid;

/// Pending requests in arrival order, plus the responses not yet collected.
#[derive(Debug)]
pub(crate) struct RequestQueue<Req, Resp> {
    requests: VecDeque<(Uuid, Req)>,
    responses: HashMap<Uuid, Resp>,
}

impl<Req, Resp> Default for RequestQueue<Req, Resp> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Resp> RequestQueue<Req, Resp> {
    pub fn new() -> Self {
        Self { requests: VecDeque::new(), responses: HashMap::new() }
    }

    pub fn add_request(&mut self, id: Uuid, request: Req) {
        self.requests.push_back((id, request));
    }

    pub fn has_request(&self, id: &Uuid) -> bool {
        self.requests.iter().any(|(req_id, _)| req_id == id)
    }

    /// The oldest pending request, left in place.
    pub fn read_request(&self) -> Option<&Req> {
        self.requests.front().map(|(_, req)| req)
    }

    pub fn remove_request(&mut self, id: &Uuid) {
        self.requests.retain(|(req_id, _)| req_id != id);
    }

    pub fn add_response(&mut self, id: Uuid, response: Resp) {
        self.responses.insert(id, response);
    }

    /// Takes the response for `id`, if one arrived.
    pub fn get_response(&mut self, id: &Uuid) -> Option<Resp> {
        self.responses.remove(id)
    }
}
