//! Test data fixtures.
//!
//! The CSV below doubles as the seed data of the test servers and as the
//! body of upload requests.

#![allow(dead_code)]

/// Eight sites with mixed categories, regions, flags and criteria. The last
/// row has no category, region, year or coordinates.
pub const SITES_CSV: &str = "\
unique_number,id_no,rev_bis,name_en,name_fr,short_description_en,justification_en,date_inscribed,danger,longitude,latitude,category,category_short,states_name_en,region_en,transboundary,C1,C2,C3,C4,C5,C6,N7,N8,N9,N10
1001,26,,Island of Gorée,Île de Gorée,The island of Gorée lies off the coast of Senegal,,1978,0,-17.39889,14.66722,Cultural,C,Senegal,Africa,0,0,0,0,0,0,1,0,0,0,0
1002,1,,Galápagos Islands,Îles Galápagos,Volcanic islands in the Pacific Ocean,,1978,0,-90.5,-0.68,Natural,N,Ecuador,Latin America and the Caribbean,0,0,0,0,0,0,0,1,1,1,1
1003,28,,Yellowstone National Park,Parc national de Yellowstone,Vast natural forest of geysers,,1978,0,-110.5,44.6,Natural,N,United States of America,Europe and North America,0,0,0,0,0,0,0,1,1,1,1
1004,119,,Timbuktu,Tombouctou,Intellectual and spiritual capital,,1988,1,-3.0,16.77,Cultural,C,Mali,Africa,0,0,1,0,1,1,0,0,0,0,0
1005,80,,Mont-Saint-Michel and its Bay,Mont-Saint-Michel et sa baie,Gothic Benedictine abbey,,1979,0,-1.51,48.63,Cultural,C,France,Europe and North America,0,1,0,1,0,0,1,0,0,0,0
1006,181,,Tasmanian Wilderness,Zone de nature sauvage de Tasmanie,Temperate rainforest,,1982,0,146.0,-42.0,Mixed,C/N,Australia,Asia and the Pacific,0,0,0,1,1,0,1,1,1,1,1
1007,354,,Waterton Glacier International Peace Park,Parc international de la paix Waterton-Glacier,Two adjoining mountain parks,Outstanding glacial landforms,1995,0,-113.9,48.9,Natural,N,\"Canada,United States of America\",Europe and North America,1,0,0,0,0,0,0,1,0,1,0
1008,999,,Test Garden 100% Wild,,,,,,,,,,Italy,,,,,,,,,,,,
";

/// Number of data rows in [`SITES_CSV`].
pub const SITE_COUNT: usize = 8;

/// Rows with both coordinates.
pub const MAPPABLE_SITES: usize = 7;

/// `id_no` of the Island of Gorée.
pub const GOREE: i64 = 26;
