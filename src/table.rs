use crate::attr::Attrs;
use crate::data::{NodeData, RecordBody};
use crate::element::{impl_node_common, NodeCore, Render};
use crate::error::Error;
use crate::render::RenderOptions;

/// The kind of a table section node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// `<thead>`
    Head,
    /// `<tfoot>`
    Foot,
    /// `<tbody>`
    Body,
}

impl SectionKind {
    /// The tag this section renders as.
    pub fn tag(&self) -> &'static str {
        match self {
            SectionKind::Head => "thead",
            SectionKind::Foot => "tfoot",
            SectionKind::Body => "tbody",
        }
    }
}

/// The kind of a table cell node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `<td>`
    Td,
    /// `<th>`
    Th,
}

impl CellKind {
    /// The tag this cell renders as.
    pub fn tag(&self) -> &'static str {
        match self {
            CellKind::Td => "td",
            CellKind::Th => "th",
        }
    }
}

/// A `<table>` node.
///
/// Children render grouped by kind in declared order — all `thead`
/// children first, then `tfoot`, then `tbody`, then bare `tr` rows —
/// regardless of append order. Within a kind, insertion order is kept.
///
/// ```rust
/// use xhtmlgen::{Render, RenderOptions, Table};
///
/// let mut table = Table::new();
/// table.tr().td("late");
/// table.thead().tr().th("first");
/// let markup = table.render(&RenderOptions::default().minimized());
/// assert_eq!(
///     markup,
///     "<table><thead><tr><th>first</th></tr></thead><tr><td>late</td></tr></table>"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    core: NodeCore,
    heads: Vec<TableSection>,
    foots: Vec<TableSection>,
    bodies: Vec<TableSection>,
    rows: Vec<Row>,
}

impl_node_common!(Table);

impl Table {
    /// Create an empty table.
    pub fn new() -> Table {
        Table::default()
    }

    /// Create a table from bulk data. Records with tags outside the
    /// table's allowed child kinds are rejected.
    pub fn from_data(data: NodeData, attrs: Attrs) -> Result<Table, Error> {
        let mut table = Table::new();
        table.attrs(attrs);
        table.extend(data)?;
        Ok(table)
    }

    /// Append an empty `thead` section and return it.
    pub fn thead(&mut self) -> &mut TableSection {
        self.heads.push(TableSection::new(SectionKind::Head));
        self.heads.last_mut().unwrap()
    }

    /// Append an empty `tfoot` section and return it.
    pub fn tfoot(&mut self) -> &mut TableSection {
        self.foots.push(TableSection::new(SectionKind::Foot));
        self.foots.last_mut().unwrap()
    }

    /// Append an empty `tbody` section and return it.
    pub fn tbody(&mut self) -> &mut TableSection {
        self.bodies.push(TableSection::new(SectionKind::Body));
        self.bodies.last_mut().unwrap()
    }

    /// Append an empty row directly under the table and return it.
    pub fn tr(&mut self) -> &mut Row {
        self.rows.push(Row::new());
        self.rows.last_mut().unwrap()
    }

    /// Append an already built section, routed by its kind.
    pub fn push_section(&mut self, section: TableSection) -> &mut Self {
        match section.kind {
            SectionKind::Head => self.heads.push(section),
            SectionKind::Foot => self.foots.push(section),
            SectionKind::Body => self.bodies.push(section),
        }
        self
    }

    /// Append an already built row.
    pub fn push_row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Extend the table from bulk data, the same normalization the
    /// constructor applies.
    pub fn extend(&mut self, data: NodeData) -> Result<&mut Self, Error> {
        match data {
            NodeData::None => {}
            NodeData::Raw(content) => {
                self.core.content = content;
            }
            NodeData::Records(records) => {
                for record in records {
                    self.append_record(&record.tag, record.body)?;
                }
            }
            NodeData::Map(map) => {
                for (tag, bodies) in map {
                    for body in bodies {
                        self.append_record(&tag, body)?;
                    }
                }
            }
        }
        Ok(self)
    }

    fn append_record(&mut self, tag: &str, body: RecordBody) -> Result<(), Error> {
        match tag.to_ascii_lowercase().as_str() {
            "thead" => self.push_section(TableSection::from_data(
                SectionKind::Head,
                body.data,
                body.attrs,
            )?),
            "tfoot" => self.push_section(TableSection::from_data(
                SectionKind::Foot,
                body.data,
                body.attrs,
            )?),
            "tbody" => self.push_section(TableSection::from_data(
                SectionKind::Body,
                body.data,
                body.attrs,
            )?),
            "tr" => self.push_row(Row::from_data(body.data, body.attrs)?),
            other => {
                return Err(Error::UnsupportedChild {
                    parent: "table".to_string(),
                    child: other.to_string(),
                })
            }
        };
        Ok(())
    }
}

impl Render for Table {
    fn render(&self, options: &RenderOptions) -> String {
        let children = self
            .heads
            .iter()
            .map(|section| section.render(options))
            .chain(self.foots.iter().map(|section| section.render(options)))
            .chain(self.bodies.iter().map(|section| section.render(options)))
            .chain(self.rows.iter().map(|row| row.render(options)))
            .collect();
        self.core.render_node(options, "table", "\n", children)
    }
}

/// A `<thead>`, `<tfoot>` or `<tbody>` node; its only child kind is `tr`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    kind: SectionKind,
    core: NodeCore,
    rows: Vec<Row>,
}

impl_node_common!(TableSection);

impl TableSection {
    /// Create an empty section of the given kind.
    pub fn new(kind: SectionKind) -> TableSection {
        TableSection {
            kind,
            core: NodeCore::new(),
            rows: Vec::new(),
        }
    }

    /// Create a section from bulk data; only `tr` records are allowed.
    pub fn from_data(kind: SectionKind, data: NodeData, attrs: Attrs) -> Result<TableSection, Error> {
        let mut section = TableSection::new(kind);
        section.attrs(attrs);
        section.extend(data)?;
        Ok(section)
    }

    /// The kind of this section.
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Append an empty row and return it.
    pub fn tr(&mut self) -> &mut Row {
        self.rows.push(Row::new());
        self.rows.last_mut().unwrap()
    }

    /// Append an already built row.
    pub fn push_row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Extend the section from bulk data.
    pub fn extend(&mut self, data: NodeData) -> Result<&mut Self, Error> {
        match data {
            NodeData::None => {}
            NodeData::Raw(content) => {
                self.core.content = content;
            }
            NodeData::Records(records) => {
                for record in records {
                    self.append_record(&record.tag, record.body)?;
                }
            }
            NodeData::Map(map) => {
                for (tag, bodies) in map {
                    for body in bodies {
                        self.append_record(&tag, body)?;
                    }
                }
            }
        }
        Ok(self)
    }

    fn append_record(&mut self, tag: &str, body: RecordBody) -> Result<(), Error> {
        if tag.eq_ignore_ascii_case("tr") {
            self.push_row(Row::from_data(body.data, body.attrs)?);
            Ok(())
        } else {
            Err(Error::UnsupportedChild {
                parent: self.kind.tag().to_string(),
                child: tag.to_ascii_lowercase(),
            })
        }
    }
}

impl Render for TableSection {
    fn render(&self, options: &RenderOptions) -> String {
        let children = self.rows.iter().map(|row| row.render(options)).collect();
        self.core.render_node(options, self.kind.tag(), "\n", children)
    }
}

/// A `<tr>` node. Child kinds in declared order: `td`, then `th`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    core: NodeCore,
    tds: Vec<Cell>,
    ths: Vec<Cell>,
}

impl_node_common!(Row);

impl Row {
    /// Create an empty row.
    pub fn new() -> Row {
        Row::default()
    }

    /// Create a row from bulk data; only `td` and `th` records are
    /// allowed.
    pub fn from_data(data: NodeData, attrs: Attrs) -> Result<Row, Error> {
        let mut row = Row::new();
        row.attrs(attrs);
        row.extend(data)?;
        Ok(row)
    }

    /// Append a `td` cell and return it.
    pub fn td(&mut self, content: impl Into<String>) -> &mut Cell {
        self.tds.push(Cell::td(content));
        self.tds.last_mut().unwrap()
    }

    /// Append a `th` cell and return it.
    pub fn th(&mut self, content: impl Into<String>) -> &mut Cell {
        self.ths.push(Cell::th(content));
        self.ths.last_mut().unwrap()
    }

    /// Append an already built cell, routed by its kind.
    pub fn push_cell(&mut self, cell: Cell) -> &mut Self {
        match cell.kind {
            CellKind::Td => self.tds.push(cell),
            CellKind::Th => self.ths.push(cell),
        }
        self
    }

    /// Extend the row from bulk data.
    pub fn extend(&mut self, data: NodeData) -> Result<&mut Self, Error> {
        match data {
            NodeData::None => {}
            NodeData::Raw(content) => {
                self.core.content = content;
            }
            NodeData::Records(records) => {
                for record in records {
                    self.append_record(&record.tag, record.body)?;
                }
            }
            NodeData::Map(map) => {
                for (tag, bodies) in map {
                    for body in bodies {
                        self.append_record(&tag, body)?;
                    }
                }
            }
        }
        Ok(self)
    }

    fn append_record(&mut self, tag: &str, body: RecordBody) -> Result<(), Error> {
        let kind = match tag.to_ascii_lowercase().as_str() {
            "td" => CellKind::Td,
            "th" => CellKind::Th,
            other => {
                return Err(Error::UnsupportedChild {
                    parent: "tr".to_string(),
                    child: other.to_string(),
                })
            }
        };
        self.push_cell(Cell::from_data(kind, body.data, body.attrs)?);
        Ok(())
    }
}

impl Render for Row {
    fn render(&self, options: &RenderOptions) -> String {
        let children = self
            .tds
            .iter()
            .chain(self.ths.iter())
            .map(|cell| cell.render(options))
            .collect();
        self.core.render_node(options, "tr", "\n", children)
    }
}

/// A `<td>` or `<th>` leaf node holding literal content.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    kind: CellKind,
    core: NodeCore,
}

impl_node_common!(Cell);

impl Cell {
    /// Create a `td` cell.
    pub fn td(content: impl Into<String>) -> Cell {
        Cell {
            kind: CellKind::Td,
            core: NodeCore {
                content: content.into(),
                ..NodeCore::new()
            },
        }
    }

    /// Create a `th` cell.
    pub fn th(content: impl Into<String>) -> Cell {
        Cell {
            kind: CellKind::Th,
            core: NodeCore {
                content: content.into(),
                ..NodeCore::new()
            },
        }
    }

    /// Create a cell from bulk data; cells are leaves, so only literal
    /// content is accepted.
    pub fn from_data(kind: CellKind, data: NodeData, attrs: Attrs) -> Result<Cell, Error> {
        let content = match data {
            NodeData::None => String::new(),
            NodeData::Raw(content) => content,
            NodeData::Records(_) | NodeData::Map(_) => {
                return Err(Error::InvalidInput(format!(
                    "{} accepts literal content only",
                    kind.tag()
                )))
            }
        };
        let mut cell = match kind {
            CellKind::Td => Cell::td(content),
            CellKind::Th => Cell::th(content),
        };
        cell.attrs(attrs);
        Ok(cell)
    }

    /// The kind of this cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Set the literal content.
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.core.content = content.into();
        self
    }
}

impl Render for Cell {
    fn render(&self, options: &RenderOptions) -> String {
        self.core
            .render_node(options, self.kind.tag(), "", Vec::new())
    }
}
