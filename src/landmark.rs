//! Well-known places that look good from every side.

use bevy::prelude::*;

use crate::coordinate::Coordinate;

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    // USA
    NewYorkStatueOfLiberty,
    NewYork,
    SanFranciscoGoldenGateBridge,
    CentralParkNewYork,
    Googleplex,
    MiamiBeach,
    LagunaBeach,
    GriffithObservatory,
    LuxorResortLasVegas,
    AppleHeadquarters,
    // Germany
    BerlinBrandenburgGate,
    HamburgTownHall,
    CologneCathedral,
    MunichChurch,
    NeuschwansteinCastle,
    HamburgElbphilharmonie,
    MuensterCastle,
    // Italy
    RomeColosseum,
    TreviFountain,
    // Spain
    SagradaFamilia,
    // England
    LondonBigBen,
    LondonEye,
    // Australia
    SydneyOperaHouse,
    // France
    ParisEiffelTower,
}

impl Landmark {
    pub const ALL: [Self; 24] = [
        Self::NewYorkStatueOfLiberty,
        Self::NewYork,
        Self::SanFranciscoGoldenGateBridge,
        Self::CentralParkNewYork,
        Self::Googleplex,
        Self::MiamiBeach,
        Self::LagunaBeach,
        Self::GriffithObservatory,
        Self::LuxorResortLasVegas,
        Self::AppleHeadquarters,
        Self::BerlinBrandenburgGate,
        Self::HamburgTownHall,
        Self::CologneCathedral,
        Self::MunichChurch,
        Self::NeuschwansteinCastle,
        Self::HamburgElbphilharmonie,
        Self::MuensterCastle,
        Self::RomeColosseum,
        Self::TreviFountain,
        Self::SagradaFamilia,
        Self::LondonBigBen,
        Self::LondonEye,
        Self::SydneyOperaHouse,
        Self::ParisEiffelTower,
    ];

    pub const fn coordinate(self) -> Coordinate {
        let (latitude, longitude) = match self {
            Self::NewYorkStatueOfLiberty => (40.689249, -74.044500),
            Self::NewYork => (40.702749, -74.014120),
            Self::SanFranciscoGoldenGateBridge => (37.826040, -122.479448),
            Self::CentralParkNewYork => (40.779269, -73.963201),
            Self::Googleplex => (37.422001, -122.084109),
            Self::MiamiBeach => (25.791007, -80.148082),
            Self::LagunaBeach => (33.543361, -117.792315),
            Self::GriffithObservatory => (34.118536, -118.300446),
            Self::LuxorResortLasVegas => (36.095511, -115.176072),
            Self::AppleHeadquarters => (37.332100, -122.029642),
            Self::BerlinBrandenburgGate => (52.516275, 13.377704),
            Self::HamburgTownHall => (53.550416, 9.992527),
            Self::CologneCathedral => (50.941278, 6.958281),
            Self::MunichChurch => (48.138631, 11.573625),
            Self::NeuschwansteinCastle => (47.557574, 10.749800),
            Self::HamburgElbphilharmonie => (53.541227, 9.984075),
            Self::MuensterCastle => (51.963691, 7.611546),
            Self::RomeColosseum => (41.89021, 12.492231),
            Self::TreviFountain => (41.900865, 12.483345),
            Self::SagradaFamilia => (41.404024, 2.174370),
            Self::LondonBigBen => (51.500729, -0.124625),
            Self::LondonEye => (51.503324, -0.119543),
            Self::SydneyOperaHouse => (-33.857197, 151.215140),
            Self::ParisEiffelTower => (48.85815, 2.29452),
        };
        Coordinate::new(latitude, longitude)
    }
}

impl From<Landmark> for Coordinate {
    fn from(landmark: Landmark) -> Self { landmark.coordinate() }
}
