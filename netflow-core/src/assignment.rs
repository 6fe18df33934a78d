// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

//! Assigning instructors to courses with a maximum flow.
//!
//! Each instructor is a vertex fed by the source with capacity equal to the
//! number of courses they are willing to teach. An instructor is joined to
//! every course they prefer by an edge of capacity 1, and every course is
//! joined to the sink by an edge of capacity 1. A maximum flow then picks as
//! many (instructor, course) pairs as possible without overloading anyone or
//! staffing a course twice.

use fixedbitset::FixedBitSet;
use indexmap::IndexSet;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flow::{solve_network_flow, Edge, FlowError, Vertex};

/// An instructor who can be assigned courses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instructor {
    pub last_name: String,
    /// Names of the courses this instructor is willing to teach.
    pub preferences: Vec<String>,
    /// Maximum number of courses this instructor is willing to teach.
    pub max_courses: u32,
    /// Courses this instructor has been assigned.
    pub assigned_courses: Vec<String>,
}

impl Instructor {
    pub fn new(last_name: impl Into<String>, max_courses: u32) -> Self {
        Instructor {
            last_name: last_name.into(),
            preferences: Vec::new(),
            max_courses,
            assigned_courses: Vec::new(),
        }
    }

    pub fn add_preference(&mut self, course: impl Into<String>) {
        self.preferences.push(course.into());
    }
}

fn to_vertex(index: usize) -> Result<Vertex, FlowError> {
    Vertex::try_from(index).map_err(|_| FlowError::InvalidEndpoint)
}

/// Assign `courses` to `instructors` so that as many courses as possible are
/// taught.
///
/// No instructor receives more than `max_courses` courses or a course missing
/// from their preferences, and no course is given to two instructors. Names
/// of assigned courses are appended to each instructor's `assigned_courses`.
/// Returns the number of courses assigned.
///
/// Instructors that cannot teach anything (no load, or no preference naming
/// one of `courses`) and courses nobody prefers are kept out of the network.
pub fn assign_courses(instructors: &mut [Instructor], courses: &[String]) -> Result<usize, FlowError> {
    let num_instructors = instructors.len();
    let num_courses = courses.len();
    let source = to_vertex(num_instructors + num_courses)?;
    let sink = to_vertex(num_instructors + num_courses + 1)?;
    let num_vertices = to_vertex(num_instructors + num_courses + 2)?;

    // Course indices each instructor offers to teach, in preference order.
    let offered: Vec<IndexSet<usize>> = instructors
        .iter()
        .map(|instructor| {
            if instructor.max_courses == 0 {
                return IndexSet::new();
            }
            instructor
                .preferences
                .iter()
                .flat_map(move |pref| {
                    courses
                        .iter()
                        .enumerate()
                        .filter(move |(_, course)| *course == pref)
                        .map(|(k, _)| k)
                })
                .collect()
        })
        .collect();

    let mut wanted = FixedBitSet::with_capacity(num_courses);
    let mut network = Vec::new();
    for (i, instructor) in instructors.iter().enumerate() {
        if !offered[i].is_empty() {
            network.push(Edge::new(source, to_vertex(i)?, instructor.max_courses));
        }
    }
    for (i, courses_offered) in offered.iter().enumerate() {
        for &k in courses_offered {
            wanted.insert(k);
            network.push(Edge::new(to_vertex(i)?, to_vertex(num_instructors + k)?, 1));
        }
    }
    for k in wanted.ones() {
        network.push(Edge::new(to_vertex(num_instructors + k)?, sink, 1));
    }

    if network.is_empty() {
        debug!("no instructor can teach any of {} courses", num_courses);
        return Ok(0);
    }
    debug!(
        "assigning {} courses among {} instructors ({} edges)",
        num_courses,
        num_instructors,
        network.len()
    );

    let flow = solve_network_flow(&network, num_vertices)?;

    let mut assigned = 0;
    for edge in flow {
        let from = edge.from as usize;
        if from < num_instructors && edge.weight == 1 {
            let course = &courses[edge.to as usize - num_instructors];
            instructors[from].assigned_courses.push(course.clone());
            assigned += 1;
        }
    }
    debug!("assigned {} of {} courses", assigned, num_courses);
    Ok(assigned)
}
